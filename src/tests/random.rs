//! Testes da estratégia Random.
//!
//! O teste de frequência é estatístico (tolerância larga), mas determinístico:
//! a semente do `SmallRng` é fixa.

use super::{fresh_state, table_with};
use crate::config::IDLE_PROCESS;
use crate::process::ProcessState::{Blocked, Ready};
use crate::strategy::SchedulingStrategy;

#[test]
fn test_random_no_ready_returns_idle() {
    let table = table_with(&[(2, Blocked, 3)]);
    let mut state = fresh_state();

    assert_eq!(
        SchedulingStrategy::Random.select(&table, 2, &mut state),
        IDLE_PROCESS
    );
}

#[test]
fn test_random_only_draws_ready_slots() {
    let table = table_with(&[(1, Ready, 1), (4, Ready, 2), (6, Blocked, 5)]);
    let mut state = fresh_state();

    for _ in 0..1_000 {
        let next = SchedulingStrategy::Random.select(&table, 1, &mut state);
        assert!(next == 1 || next == 4, "sorteou slot inelegível: {}", next);
    }
}

#[test]
fn test_random_frequency_approaches_uniform() {
    // 4 slots prontos, 8000 sorteios: esperado 2000 por slot. A faixa
    // [1700, 2300] está bem além de 5 desvios-padrão; um gerador decente
    // não sai dela.
    let table = table_with(&[(1, Ready, 1), (3, Ready, 2), (5, Ready, 3), (7, Ready, 4)]);
    let mut state = fresh_state();
    let mut counts = [0usize; 8];

    for _ in 0..8_000 {
        let next = SchedulingStrategy::Random.select(&table, 1, &mut state);
        counts[next] += 1;
    }

    for slot in [1, 3, 5, 7] {
        assert!(
            (1_700..=2_300).contains(&counts[slot]),
            "slot {} sorteado {} vezes",
            slot,
            counts[slot]
        );
    }
    assert_eq!(counts[0] + counts[2] + counts[4] + counts[6], 0);
}

#[test]
fn test_random_does_not_touch_other_state() {
    let table = table_with(&[(2, Ready, 3), (5, Ready, 1)]);
    let mut state = fresh_state();
    state.slice_left = 4;
    state.aging_slice = 2;
    state.age[5] = 7;

    SchedulingStrategy::Random.select(&table, 2, &mut state);

    assert_eq!(state.slice_left(), 4);
    assert_eq!(state.aging_slice, 2);
    assert_eq!(state.age_of(5), 7);
}
