//! Testes do núcleo de seleção de processos.
//!
//! # Como Executar
//!
//! ```bash
//! # Todos os testes (no host)
//! cargo test
//!
//! # Testes de um módulo específico
//! cargo test tests::strategies
//! cargo test tests::reset
//! cargo test tests::random
//! ```
//!
//! # Estrutura
//!
//! - `strategies.rs` - Estratégias determinísticas (Even, RoundRobin,
//!   InactiveAging, RunToCompletion) e o cenário concreto de 8 slots
//! - `random.rs` - Estratégia Random (incluindo o teste estatístico de
//!   frequência, com semente fixa)
//! - `reset.rs` - Contratos de reset e fachada do escalonador
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários
//! - Sementes fixas em toda fonte pseudo-aleatória, para determinismo

#![cfg(test)]

pub mod random;

use crate::process::{Process, ProcessId, ProcessState, ProcessTable};
use crate::state::SchedulingState;

/// Monta uma tabela com os slots dados; o resto fica `Unused`.
pub fn table_with(specs: &[(ProcessId, ProcessState, u8)]) -> ProcessTable {
    let mut table = ProcessTable::new();
    for &(slot, state, priority) in specs {
        table[slot] = Process::new(state, priority);
    }
    table
}

/// Estado novo com semente fixa.
pub fn fresh_state() -> SchedulingState {
    SchedulingState::new(0xD1CE)
}
