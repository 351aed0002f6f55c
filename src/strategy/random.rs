//! Estratégia Random - sorteio uniforme entre os slots prontos.
//!
//! Uma única varredura linear coleta os slots reais em `Ready`; um deles é
//! sorteado com distribuição uniforme pela fonte pseudo-aleatória do estado.
//! Não-determinística por construção; nenhum outro campo do estado é tocado.

use crate::config::{IDLE_PROCESS, MAX_NUMBER_OF_PROCESSES};
use crate::process::{ProcessId, ProcessState, ProcessTable};
use crate::state::SchedulingState;
use rand::Rng;

pub(super) fn select(table: &ProcessTable, state: &mut SchedulingState) -> ProcessId {
    // Sem heap: os candidatos cabem num array de tamanho fixo.
    let mut ready = [IDLE_PROCESS; MAX_NUMBER_OF_PROCESSES];
    let mut count = 0;

    for slot in 1..MAX_NUMBER_OF_PROCESSES {
        if table[slot].state == ProcessState::Ready {
            ready[count] = slot;
            count += 1;
        }
    }

    if count == 0 {
        return IDLE_PROCESS;
    }

    ready[state.rng.gen_range(0..count)]
}
