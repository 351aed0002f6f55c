//! Estratégia Even - revezamento puro.
//!
//! Todo processo pronto recebe a mesma quantidade de tempo: a cada chamada o
//! próximo slot `Ready` na ordem circular assume a CPU. Determinística,
//! O(N) no pior caso, sem efeito algum sobre o estado de escalonamento.

use super::next_ready;
use crate::process::{ProcessId, ProcessTable};

pub(super) fn select(table: &ProcessTable, current: ProcessId) -> ProcessId {
    next_ready(table, current)
}
