//! Constantes de configuração do núcleo de seleção

use crate::process::ProcessId;

/// Número total de slots na tabela de processos (slot 0 incluso)
pub const MAX_NUMBER_OF_PROCESSES: usize = 8;

/// Slot reservado do processo idle, devolvido quando nenhum slot real está pronto
pub const IDLE_PROCESS: ProcessId = 0;

/// Limite de sondagens de uma varredura circular: um ciclo completo sobre os
/// slots reais (1..N-1). É o que garante terminação quando nenhum processo
/// jamais fica pronto.
pub const SCAN_BOUND: usize = MAX_NUMBER_OF_PROCESSES - 1;

/// Prioridade padrão para processos recém-criados
pub const PRIORITY_DEFAULT: u8 = 1;
