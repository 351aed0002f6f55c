//! Estratégia RunToCompletion - cooperativa, sem preempção.
//!
//! Enquanto o processo corrente continuar executável (`Running`), ele nunca
//! perde a CPU. Só quando ele mesmo sai desse estado (bloqueou ou terminou)
//! a varredura procura um substituto, e começa do slot 1, não do sucessor
//! do corrente.

use super::next_ready;
use crate::config::IDLE_PROCESS;
use crate::process::{ProcessId, ProcessState, ProcessTable};

pub(super) fn select(table: &ProcessTable, current: ProcessId) -> ProcessId {
    if table[current].state == ProcessState::Running {
        return current;
    }

    // Varrer a partir do slot 1: o sucessor da sentinela é exatamente 1.
    next_ready(table, IDLE_PROCESS)
}
