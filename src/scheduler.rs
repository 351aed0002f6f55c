//! Fachada do escalonador - a porta de entrada do kernel hospedeiro.
//!
//! Mantém a instância global do estado de escalonamento e a estratégia
//! ativa, e coordena os três pontos de contato com o resto do kernel:
//! a decisão por tick (`select_next`), a troca de estratégia
//! (`set_strategy`) e a reciclagem de slot (`on_slot_recycled`).
//!
//! ## Sincronização
//! A instância global vive atrás de um único Spinlock. Em um kernel
//! single-core com decisões síncronas por tick isso é suficiente; o lock
//! nunca é mantido através de uma suspensão porque não existe suspensão.
// TODO: (SMP) Estado por CPU quando o kernel hospedeiro ganhar multicore.

use crate::config::IDLE_PROCESS;
use crate::process::{ProcessId, ProcessTable};
use crate::state::SchedulingState;
use crate::strategy::SchedulingStrategy;
use log::{info, trace, warn};
use spin::Mutex;

/// Estratégia ativa + estado persistente, como uma unidade.
///
/// O kernel pode usar esta estrutura diretamente (propriedade explícita,
/// ideal para testes) ou através da instância global abaixo.
pub struct Scheduler {
    strategy: SchedulingStrategy,
    state: SchedulingState,
}

impl Scheduler {
    /// Cria o escalonador com a estratégia padrão de boot (`Even`).
    pub fn new(seed: u64) -> Self {
        Self {
            strategy: SchedulingStrategy::default(),
            state: SchedulingState::new(seed),
        }
    }

    /// Estratégia atualmente ativa.
    pub fn strategy(&self) -> SchedulingStrategy {
        self.strategy
    }

    /// Estado persistente (somente leitura, para inspeção/diagnóstico).
    pub fn state(&self) -> &SchedulingState {
        &self.state
    }

    /// Troca a estratégia ativa.
    ///
    /// Executa o reset de estado da estratégia de destino de forma síncrona,
    /// antes que qualquer seleção aconteça sob ela; este é o único ponto de
    /// acoplamento entre estratégias e precisa ser preservado exatamente.
    pub fn set_strategy(
        &mut self,
        strategy: SchedulingStrategy,
        table: &ProcessTable,
        current: ProcessId,
    ) {
        self.strategy = strategy;
        self.state.reset_for_strategy(strategy, table, current);
        info!("(Sched) Estratégia ativa: {:?}", strategy);
    }

    /// Um slot foi reciclado para um processo novo: zera o crédito de espera
    /// herdado do ocupante anterior.
    pub fn on_slot_recycled(&mut self, id: ProcessId) {
        self.state.reset_slot(id);
    }

    /// Decide quem roda no próximo tick.
    pub fn select_next(&mut self, table: &ProcessTable, current: ProcessId) -> ProcessId {
        let next = self.strategy.select(table, current, &mut self.state);
        trace!("(Sched) {:?} selecionou o slot {}", self.strategy, next);
        next
    }
}

/// Instância global do escalonador.
///
/// `None` até `init()`: o estado precisa da semente do kernel hospedeiro e
/// por isso não pode nascer em contexto const.
pub static SCHEDULER: Mutex<Option<Scheduler>> = Mutex::new(None);

/// Inicializa o subsistema de seleção. Chamado uma vez no boot do kernel.
pub fn init(seed: u64) {
    let mut guard = SCHEDULER.lock();
    if guard.is_some() {
        warn!("(Sched) init chamado mais de uma vez! Ignorando...");
        return;
    }
    *guard = Some(Scheduler::new(seed));
    info!(
        "(Sched) Núcleo de seleção pronto (estratégia {:?})",
        SchedulingStrategy::default()
    );
}

/// Decisão por tick sobre a instância global.
///
/// Sem `init()` prévio não há estado para decidir: degrada para a sentinela
/// em vez de travar o kernel.
pub fn select_next(table: &ProcessTable, current: ProcessId) -> ProcessId {
    match SCHEDULER.lock().as_mut() {
        Some(sched) => sched.select_next(table, current),
        None => {
            warn!("(Sched) select_next antes de init; devolvendo idle");
            IDLE_PROCESS
        }
    }
}

/// Troca de estratégia sobre a instância global.
pub fn set_strategy(strategy: SchedulingStrategy, table: &ProcessTable, current: ProcessId) {
    if let Some(sched) = SCHEDULER.lock().as_mut() {
        sched.set_strategy(strategy, table, current);
    }
}

/// Reciclagem de slot sobre a instância global.
pub fn on_slot_recycled(id: ProcessId) {
    if let Some(sched) = SCHEDULER.lock().as_mut() {
        sched.on_slot_recycled(id);
    }
}
