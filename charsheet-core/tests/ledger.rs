//! Coin ledger behavior over randomized purses and persisted shapes.

use charsheet_core::coins::{
    apply_deltas_with_change, can_afford, to_copper, try_apply_deltas, CoinPurse, Denomination,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_purse(rng: &mut StdRng, max: i64) -> CoinPurse {
    CoinPurse::new(
        rng.gen_range(0..=max),
        rng.gen_range(0..=max),
        rng.gen_range(0..=max),
        rng.gen_range(0..=max),
        rng.gen_range(0..=max),
    )
}

fn random_deltas(rng: &mut StdRng, max: i64) -> CoinPurse {
    CoinPurse::new(
        rng.gen_range(-max..=max),
        rng.gen_range(-max..=max),
        rng.gen_range(-max..=max),
        rng.gen_range(-max..=max),
        rng.gen_range(-max..=max),
    )
}

#[test]
fn test_value_is_conserved_when_affordable() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut checked = 0;
    for _ in 0..5_000 {
        let current = random_purse(&mut rng, 20);
        let deltas = random_deltas(&mut rng, 25);
        if !can_afford(&current, &deltas) {
            continue;
        }
        let result = apply_deltas_with_change(&current, &deltas);
        assert_eq!(
            to_copper(&result),
            to_copper(&current) + to_copper(&deltas),
            "{current} + {deltas:?}"
        );
        assert!(result.is_settled(), "{current} + {deltas:?} gave {result:?}");
        checked += 1;
    }
    assert!(checked > 1_000);
}

#[test]
fn test_unaffordable_is_rejected_by_checked_path() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let current = random_purse(&mut rng, 5);
        let deltas = -random_purse(&mut rng, 10);
        match try_apply_deltas(&current, &deltas) {
            Ok(result) => assert!(result.is_settled()),
            Err(_) => assert!(!can_afford(&current, &deltas)),
        }
    }
}

#[test]
fn test_spending_copper_only_touches_what_it_must() {
    let current = CoinPurse::new(2, 7, 0, 0, 0);
    let result = apply_deltas_with_change(&current, &CoinPurse::of(Denomination::Cp, -1));
    assert_eq!(result, CoinPurse::new(2, 6, 0, 9, 9));
}

#[test]
fn test_purse_json_shape() {
    let purse = CoinPurse::new(1, 2, 3, 4, 5);
    let json = serde_json::to_value(purse).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"pp": 1, "gp": 2, "ep": 3, "sp": 4, "cp": 5})
    );

    let partial: CoinPurse = serde_json::from_str(r#"{"gp": 12}"#).unwrap();
    assert_eq!(partial, CoinPurse::of(Denomination::Gp, 12));

    let denomination: Denomination = serde_json::from_str(r#""ep""#).unwrap();
    assert_eq!(denomination, Denomination::Ep);
}
