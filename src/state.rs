//! Estado de Escalonamento - o que persiste entre invocações.
//!
//! Cada estratégia que precisa de memória entre ticks guarda aqui a sua:
//! RoundRobin o restante da fatia de tempo, InactiveAging o gatilho de
//! envelhecimento e os créditos de espera, Random a fonte pseudo-aleatória.
//! Os contadores são separados por estratégia de propósito: estratégias que
//! nunca estão ativas ao mesmo tempo não compartilham campo algum.
//!
//! O estado é um objeto de contexto explícito, criado uma vez na
//! inicialização do kernel e passado por `&mut` a cada decisão. Os dois
//! pontos de reset (troca de estratégia, reciclagem de slot) são os únicos
//! gatilhos externos permitidos.

use crate::config::{IDLE_PROCESS, MAX_NUMBER_OF_PROCESSES};
use crate::process::{ProcessId, ProcessTable};
use crate::strategy::SchedulingStrategy;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Estado mutável consultado/alterado pelas estratégias de seleção.
pub struct SchedulingState {
    /// Fatia de tempo restante do processo corrente (RoundRobin)
    pub(crate) slice_left: u8,
    /// Ticks até a próxima reavaliação por envelhecimento (InactiveAging)
    pub(crate) aging_slice: u8,
    /// Crédito de espera acumulado por slot (InactiveAging).
    /// Mesmo comprimento da tabela; a entrada 0 existe mas nunca
    /// participa de uma seleção.
    pub(crate) age: [u32; MAX_NUMBER_OF_PROCESSES],
    /// Fonte pseudo-aleatória da estratégia Random, semeada na inicialização
    pub(crate) rng: SmallRng,
}

impl SchedulingState {
    /// Cria o estado inicial. A semente vem do kernel hospedeiro
    /// (tipicamente de um timer ou fonte de entropia de boot).
    pub fn new(seed: u64) -> Self {
        Self {
            slice_left: 0,
            aging_slice: 0,
            age: [0; MAX_NUMBER_OF_PROCESSES],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reset ao trocar a estratégia ativa.
    ///
    /// Contrato: chamado pelo kernel exatamente uma vez, de forma síncrona,
    /// a cada troca, antes da primeira seleção sob a nova estratégia.
    ///
    /// - `RoundRobin`: re-semeia a fatia com a prioridade do slot corrente.
    /// - `InactiveAging`: zera todos os créditos e o gatilho de
    ///   envelhecimento; a nova estratégia começa sem herança.
    /// - Demais estratégias: nenhum estado para restaurar.
    pub fn reset_for_strategy(
        &mut self,
        strategy: SchedulingStrategy,
        table: &ProcessTable,
        current: ProcessId,
    ) {
        debug_assert!(
            current < MAX_NUMBER_OF_PROCESSES,
            "slot corrente fora da tabela"
        );
        let current = if current < MAX_NUMBER_OF_PROCESSES {
            current
        } else {
            IDLE_PROCESS
        };

        match strategy {
            SchedulingStrategy::RoundRobin => {
                self.slice_left = table[current].priority;
                debug!("(Sched) Reset RoundRobin: fatia = {}", self.slice_left);
            }
            SchedulingStrategy::InactiveAging => {
                self.age = [0; MAX_NUMBER_OF_PROCESSES];
                self.aging_slice = 0;
                debug!("(Sched) Reset InactiveAging: créditos zerados");
            }
            _ => {}
        }
    }

    /// Reset ao reciclar um slot para um processo recém-criado.
    ///
    /// Contrato: chamado antes de o slot ser considerado `Ready` pela
    /// primeira vez, para que o crédito de espera do ocupante anterior não
    /// enviese a seleção.
    pub fn reset_slot(&mut self, id: ProcessId) {
        debug_assert!(id < MAX_NUMBER_OF_PROCESSES, "slot reciclado fora da tabela");
        if let Some(entry) = self.age.get_mut(id) {
            *entry = 0;
            debug!("(Sched) Crédito do slot {} zerado", id);
        }
    }

    /// Crédito de espera acumulado de um slot (0 para índices inválidos).
    pub fn age_of(&self, id: ProcessId) -> u32 {
        self.age.get(id).copied().unwrap_or(0)
    }

    /// Fatia de tempo restante do processo corrente sob RoundRobin.
    pub fn slice_left(&self) -> u8 {
        self.slice_left
    }
}
