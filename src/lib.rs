//! # Núcleo de Seleção de Processos (forge-sched)
//!
//! Este crate é o coração decisório do escalonador: dado o estado atual da
//! tabela de processos e o slot em execução, responde "quem ocupa a CPU no
//! próximo tick". Nada além disso: a troca de contexto, a criação de
//! processos e as interrupções pertencem ao kernel hospedeiro.
//!
//! ## 🎯 Propósito e Responsabilidade
//! - **Estratégias de Seleção:** Cinco funções de decisão independentes
//!   (Even, Random, RoundRobin, InactiveAging, RunToCompletion), todas totais:
//!   sempre devolvem um slot válido.
//! - **Estado de Escalonamento:** Fatias de tempo e créditos de espera que
//!   persistem entre invocações, com os dois pontos de reset exigidos pelo
//!   contrato (troca de estratégia e reciclagem de slot).
//! - **Fallback Idle:** "Nenhum processo pronto" não é erro — é o slot 0,
//!   reservado como sentinela, que o kernel despacha para a rotina ociosa.
//!
//! ## 🏗️ Arquitetura
//! O estado é um objeto de contexto explícito (`SchedulingState`), passado
//! por referência mutável a cada decisão. A instância global, protegida por
//! Spinlock, vive apenas na fachada `scheduler`; o núcleo em si não depende
//! de estado ambiente, o que permite testes determinísticos no host.
//!
//! ## 🔍 Modelo de Execução
//! Thread lógica única: o kernel invoca exatamente um seletor por tick de
//! escalonamento, com a tabela quiescente durante a chamada. Nenhuma operação
//! bloqueia, suspende ou atravessa ticks; toda varredura tem limite fixo de
//! iterações (no máximo um ciclo completo sobre os slots reais).

#![no_std]

pub mod config;
pub mod process;
pub mod scheduler;
pub mod state;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use config::{IDLE_PROCESS, MAX_NUMBER_OF_PROCESSES};
pub use process::{Process, ProcessId, ProcessState, ProcessTable};
pub use scheduler::Scheduler;
pub use state::SchedulingState;
pub use strategy::SchedulingStrategy;
