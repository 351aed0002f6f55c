//! Registro de processo (PCB) e visão da tabela.
//!
//! A tabela pertence ao kernel hospedeiro; este núcleo apenas a lê durante
//! uma decisão. O slot 0 é a sentinela do processo idle e nunca representa
//! uma carga de trabalho real: seu estado e prioridade são valores de
//! preenchimento que não podem influenciar desempates entre processos reais.

use crate::config::MAX_NUMBER_OF_PROCESSES;
use core::ops::{Index, IndexMut};

/// Índice de um slot na tabela de processos (PID lógico).
pub type ProcessId = usize;

/// Estado do ciclo de vida do processo.
///
/// Apenas `Ready` e `Running` são consultados pelas estratégias de seleção;
/// os demais existem para o ciclo de vida gerido pelo kernel hospedeiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessState {
    /// Slot vazio, disponível para reciclagem
    #[default]
    Unused,
    /// Elegível para seleção, aguardando CPU
    Ready,
    /// Ocupando a CPU neste momento
    Running,
    /// Aguardando recurso externo; invisível para as estratégias
    Blocked,
}

/// O registro de processo (PCB), na parte visível a este núcleo.
#[derive(Debug, Clone, Copy, Default)]
pub struct Process {
    pub state: ProcessState,
    /// Prioridade do processo: define o comprimento da fatia de tempo
    /// (RoundRobin) e o incremento de envelhecimento (InactiveAging).
    pub priority: u8,
}

impl Process {
    /// Registro vazio; também o valor sentinela do slot 0.
    pub const fn unused() -> Self {
        Self {
            state: ProcessState::Unused,
            priority: 0,
        }
    }

    pub const fn new(state: ProcessState, priority: u8) -> Self {
        Self { state, priority }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == ProcessState::Ready
    }
}

/// Sequência ordenada de tamanho fixo com os N registros de processo.
///
/// Os índices `1..N` endereçam processos reais; o índice 0 é reservado.
/// Propriedade do kernel hospedeiro: a mutação (via `IndexMut`) acontece
/// fora de uma chamada de decisão, nunca durante.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    slots: [Process; MAX_NUMBER_OF_PROCESSES],
}

impl ProcessTable {
    /// Tabela vazia: todos os slots `Unused`.
    pub const fn new() -> Self {
        Self {
            slots: [Process::unused(); MAX_NUMBER_OF_PROCESSES],
        }
    }

    /// Quantidade de slots reais em estado `Ready`.
    pub fn ready_count(&self) -> usize {
        self.slots
            .iter()
            .skip(1)
            .filter(|proc| proc.is_ready())
            .count()
    }

    /// Itera sobre os índices dos slots reais (exclui a sentinela).
    pub fn real_slots(&self) -> impl Iterator<Item = ProcessId> {
        1..MAX_NUMBER_OF_PROCESSES
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ProcessId> for ProcessTable {
    type Output = Process;

    fn index(&self, id: ProcessId) -> &Process {
        &self.slots[id]
    }
}

impl IndexMut<ProcessId> for ProcessTable {
    fn index_mut(&mut self, id: ProcessId) -> &mut Process {
        &mut self.slots[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_all_unused() {
        let table = ProcessTable::new();
        for slot in 0..MAX_NUMBER_OF_PROCESSES {
            assert_eq!(table[slot].state, ProcessState::Unused);
            assert_eq!(table[slot].priority, 0);
        }
    }

    #[test]
    fn test_ready_count_ignores_sentinel() {
        let mut table = ProcessTable::new();
        table[0] = Process::new(ProcessState::Ready, 9); // sentinela corrompida
        table[3] = Process::new(ProcessState::Ready, 2);
        table[5] = Process::new(ProcessState::Blocked, 4);
        assert_eq!(table.ready_count(), 1);
    }

    #[test]
    fn test_real_slots_excludes_idle() {
        let table = ProcessTable::new();
        let mut iter = table.real_slots();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(table.real_slots().count(), MAX_NUMBER_OF_PROCESSES - 1);
    }
}
