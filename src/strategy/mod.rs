//! Estratégias de seleção de processo.
//!
//! Cada estratégia é uma função de decisão total
//! `(tabela, slot corrente, estado) -> próximo slot`: nunca falha, nunca
//! bloqueia, e quando nenhum slot real está pronto devolve a sentinela
//! `IDLE_PROCESS`. A diferença entre elas está apenas em como consultam e
//! alteram o `SchedulingState`.

mod even;
mod inactive_aging;
mod random;
mod round_robin;
mod run_to_completion;

use crate::config::{IDLE_PROCESS, MAX_NUMBER_OF_PROCESSES, SCAN_BOUND};
use crate::process::{ProcessId, ProcessState, ProcessTable};
use crate::state::SchedulingState;

/// Estratégias de escalonamento suportadas.
///
/// Qual delas está ativa é decisão do kernel hospedeiro; este núcleo expõe
/// as cinco como funções independentes, sem memória de qual foi chamada por
/// último.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulingStrategy {
    /// Revezamento puro entre slots prontos, sem pesos (padrão de boot)
    #[default]
    Even,
    /// Sorteio uniforme entre os slots prontos
    Random,
    /// Fatias de tempo ponderadas pela prioridade
    RoundRobin,
    /// Justiça por crédito de espera (limita inanição)
    InactiveAging,
    /// Cooperativo: nunca preempta um processo ainda executável
    RunToCompletion,
}

impl SchedulingStrategy {
    /// Decide o próximo slot a executar.
    ///
    /// Função total: devolve sempre um índice válido da tabela. Um `current`
    /// fora da faixa é violação de contrato do chamador: capturada por
    /// `debug_assert` e degradada para a sentinela em release, para que um
    /// índice corrompido nunca selecione um processo errado por acidente.
    pub fn select(
        self,
        table: &ProcessTable,
        current: ProcessId,
        state: &mut SchedulingState,
    ) -> ProcessId {
        debug_assert!(
            current < MAX_NUMBER_OF_PROCESSES,
            "slot corrente fora da tabela"
        );
        let current = if current < MAX_NUMBER_OF_PROCESSES {
            current
        } else {
            IDLE_PROCESS
        };

        match self {
            Self::Even => even::select(table, current),
            Self::Random => random::select(table, state),
            Self::RoundRobin => round_robin::select(table, current, state),
            Self::InactiveAging => inactive_aging::select(table, current, state),
            Self::RunToCompletion => run_to_completion::select(table, current),
        }
    }
}

/// Varredura circular limitada: procura o primeiro slot `Ready` a partir de
/// `current + 1`, voltando do último slot real para o slot 1 (a sentinela
/// nunca é sondada). Após no máximo um ciclo completo sobre os slots reais,
/// devolve `IDLE_PROCESS`.
///
/// O limite fixo de iterações é o que garante terminação quando nenhum
/// processo jamais fica pronto.
pub(crate) fn next_ready(table: &ProcessTable, current: ProcessId) -> ProcessId {
    let mut slot = wrap_next(current);
    for _ in 0..SCAN_BOUND {
        if table[slot].state == ProcessState::Ready {
            return slot;
        }
        slot = wrap_next(slot);
    }
    IDLE_PROCESS
}

/// Sucessor na ordem circular dos slots reais: N-1 volta para 1.
#[inline]
fn wrap_next(slot: ProcessId) -> ProcessId {
    if slot >= MAX_NUMBER_OF_PROCESSES - 1 {
        1
    } else {
        slot + 1
    }
}
