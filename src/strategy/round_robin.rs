//! Estratégia RoundRobin - fatias de tempo ponderadas pela prioridade.
//!
//! O processo corrente mantém a CPU enquanto sua fatia não chega a zero; a
//! fatia é semeada com a prioridade do processo selecionado e decrementada a
//! cada chamada. Esgotada a fatia, a varredura circular (idêntica à Even)
//! escolhe o próximo slot pronto e semeia a fatia seguinte.

use super::next_ready;
use crate::config::IDLE_PROCESS;
use crate::process::{ProcessId, ProcessTable};
use crate::state::SchedulingState;

pub(super) fn select(
    table: &ProcessTable,
    current: ProcessId,
    state: &mut SchedulingState,
) -> ProcessId {
    if state.slice_left > 0 {
        state.slice_left -= 1;
        return current;
    }

    let next = next_ready(table, current);
    if next != IDLE_PROCESS {
        state.slice_left = table[next].priority;
    }
    next
}
