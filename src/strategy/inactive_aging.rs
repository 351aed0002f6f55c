//! Estratégia InactiveAging - justiça por crédito de espera.
//!
//! Enquanto o processo corrente consome sua fatia, todos os outros slots
//! reais acumulam crédito proporcional à própria prioridade. Esgotada a
//! fatia, vence o slot pronto com maior crédito; o desempate é uma ordem
//! total de três chaves: crédito decrescente, prioridade decrescente,
//! índice crescente. O crédito limita a inanição: quem espera mais tempo
//! acaba vencendo mesmo com prioridade menor.

use crate::config::{IDLE_PROCESS, MAX_NUMBER_OF_PROCESSES};
use crate::process::{ProcessId, ProcessState, ProcessTable};
use crate::state::SchedulingState;

pub(super) fn select(
    table: &ProcessTable,
    current: ProcessId,
    state: &mut SchedulingState,
) -> ProcessId {
    // Fase 1: a fatia do corrente ainda não acabou. Ele mantém a CPU e os
    // demais slots reais envelhecem, cada um pela própria prioridade.
    if state.aging_slice > 0 {
        state.aging_slice -= 1;
        for slot in 1..MAX_NUMBER_OF_PROCESSES {
            if slot != current {
                state.age[slot] =
                    state.age[slot].saturating_add(u32::from(table[slot].priority));
            }
        }
        return current;
    }

    // Fase 2: reavaliação. O processo prestes a ser preemptado recomeça com
    // crédito igual à própria prioridade: não parte em desvantagem no
    // próximo ciclo.
    state.age[current] = u32::from(table[current].priority);

    // A sentinela não entra na disputa: o candidato inicial é "ninguém",
    // nunca o slot 0. Como a varredura é ascendente, só um candidato
    // estritamente melhor substitui o vencedor; empate total fica com o
    // menor índice.
    let mut winner: Option<ProcessId> = None;
    for slot in 1..MAX_NUMBER_OF_PROCESSES {
        if table[slot].state != ProcessState::Ready {
            continue;
        }
        let better = match winner {
            None => true,
            Some(best) => {
                (state.age[slot], table[slot].priority)
                    > (state.age[best], table[best].priority)
            }
        };
        if better {
            winner = Some(slot);
        }
    }

    match winner {
        Some(slot) => {
            // O vencedor roda por `priority` ticks antes da próxima
            // reavaliação, simétrico à semeadura de fatia do RoundRobin.
            state.aging_slice = table[slot].priority;
            slot
        }
        None => IDLE_PROCESS,
    }
}
