//! Coin purse arithmetic.
//!
//! Five denominations at fixed rates: 1 pp = 10 gp = 20 ep = 100 sp = 1000 cp.
//! [`apply_deltas_with_change`] adds signed deltas and makes change the way a
//! shopkeeper would, breaking only the higher coins a shortfall needs instead
//! of consolidating the purse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;
use thiserror::Error;

/// Errors from checked ledger operations and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Insufficient funds: need {needed} cp, have {available} cp")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    #[error("Invalid coin amount: {0}")]
    InvalidAmount(String),
}

/// A coin type, ordered by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Cp,
    Sp,
    Ep,
    Gp,
    Pp,
}

impl Denomination {
    /// Every denomination, lowest value first.
    pub const ALL: [Denomination; 5] = [
        Denomination::Cp,
        Denomination::Sp,
        Denomination::Ep,
        Denomination::Gp,
        Denomination::Pp,
    ];

    pub fn value_in_copper(self) -> i64 {
        match self {
            Denomination::Cp => 1,
            Denomination::Sp => 10,
            Denomination::Ep => 50,
            Denomination::Gp => 100,
            Denomination::Pp => 1000,
        }
    }

    /// The coin one unit of this breaks into, and how many of them.
    ///
    /// Only adjacent steps are listed: nothing breaks into electrum, and gold
    /// never breaks directly into copper.
    pub fn breaks_into(self) -> Option<(Denomination, i64)> {
        match self {
            Denomination::Pp => Some((Denomination::Gp, 10)),
            Denomination::Gp => Some((Denomination::Sp, 10)),
            Denomination::Ep => Some((Denomination::Sp, 5)),
            Denomination::Sp => Some((Denomination::Cp, 10)),
            Denomination::Cp => None,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Denomination::Cp => "cp",
            Denomination::Sp => "sp",
            Denomination::Ep => "ep",
            Denomination::Gp => "gp",
            Denomination::Pp => "pp",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Denomination::Cp => "copper",
            Denomination::Sp => "silver",
            Denomination::Ep => "electrum",
            Denomination::Gp => "gold",
            Denomination::Pp => "platinum",
        }
    }

    /// Whether repeatedly breaking this coin eventually yields `target`.
    fn reaches(self, target: Denomination) -> bool {
        let mut step = self;
        while let Some((lower, _)) = step.breaks_into() {
            if lower == target {
                return true;
            }
            step = lower;
        }
        false
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Denomination {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cp" | "copper" => Ok(Denomination::Cp),
            "sp" | "silver" => Ok(Denomination::Sp),
            "ep" | "electrum" => Ok(Denomination::Ep),
            "gp" | "gold" => Ok(Denomination::Gp),
            "pp" | "platinum" => Ok(Denomination::Pp),
            _ => Err(LedgerError::UnknownDenomination(s.to_string())),
        }
    }
}

/// Coin counts by denomination.
///
/// Counts are signed so the same type can carry deltas. A purse produced by
/// [`apply_deltas_with_change`] from sufficient funds has no negative count.
///
/// Arithmetic saturates instead of overflowing. Values are exact while the
/// total stays within `i64` copper, about 9.2 quadrillion gp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinPurse {
    pub pp: i64,
    pub gp: i64,
    pub ep: i64,
    pub sp: i64,
    pub cp: i64,
}

impl CoinPurse {
    pub fn new(pp: i64, gp: i64, ep: i64, sp: i64, cp: i64) -> Self {
        Self { pp, gp, ep, sp, cp }
    }

    /// A purse holding `amount` of a single denomination.
    pub fn of(denomination: Denomination, amount: i64) -> Self {
        let mut purse = Self::default();
        *purse.get_mut(denomination) = amount;
        purse
    }

    pub fn get(&self, denomination: Denomination) -> i64 {
        match denomination {
            Denomination::Cp => self.cp,
            Denomination::Sp => self.sp,
            Denomination::Ep => self.ep,
            Denomination::Gp => self.gp,
            Denomination::Pp => self.pp,
        }
    }

    pub fn get_mut(&mut self, denomination: Denomination) -> &mut i64 {
        match denomination {
            Denomination::Cp => &mut self.cp,
            Denomination::Sp => &mut self.sp,
            Denomination::Ep => &mut self.ep,
            Denomination::Gp => &mut self.gp,
            Denomination::Pp => &mut self.pp,
        }
    }

    /// True when no count is negative.
    pub fn is_settled(&self) -> bool {
        Denomination::ALL.iter().all(|&d| self.get(d) >= 0)
    }

    pub fn is_empty(&self) -> bool {
        Denomination::ALL.iter().all(|&d| self.get(d) == 0)
    }

    pub fn total_copper(&self) -> i64 {
        to_copper(self)
    }
}

impl Add for CoinPurse {
    type Output = CoinPurse;

    fn add(self, rhs: CoinPurse) -> CoinPurse {
        CoinPurse {
            pp: self.pp.saturating_add(rhs.pp),
            gp: self.gp.saturating_add(rhs.gp),
            ep: self.ep.saturating_add(rhs.ep),
            sp: self.sp.saturating_add(rhs.sp),
            cp: self.cp.saturating_add(rhs.cp),
        }
    }
}

impl Neg for CoinPurse {
    type Output = CoinPurse;

    fn neg(self) -> CoinPurse {
        CoinPurse {
            pp: self.pp.saturating_neg(),
            gp: self.gp.saturating_neg(),
            ep: self.ep.saturating_neg(),
            sp: self.sp.saturating_neg(),
            cp: self.cp.saturating_neg(),
        }
    }
}

/// Highest denomination first, zero counts omitted: `"3 gp, 5 sp"`.
impl fmt::Display for CoinPurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0 cp");
        }
        let parts: Vec<String> = Denomination::ALL
            .iter()
            .rev()
            .filter(|&&d| self.get(d) != 0)
            .map(|&d| format!("{} {}", self.get(d), d))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Parses the [`Display`](fmt::Display) form. Repeated denominations add up.
impl FromStr for CoinPurse {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut purse = CoinPurse::default();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (amount, denomination) = part
                .split_once(char::is_whitespace)
                .ok_or_else(|| LedgerError::InvalidAmount(part.to_string()))?;
            let amount: i64 = amount
                .parse()
                .map_err(|_| LedgerError::InvalidAmount(part.to_string()))?;
            let count = purse.get_mut(denomination.parse()?);
            *count = count.saturating_add(amount);
        }
        Ok(purse)
    }
}

/// Total value of a purse in copper pieces, saturating at the `i64` bounds.
pub fn to_copper(purse: &CoinPurse) -> i64 {
    Denomination::ALL.iter().fold(0i64, |total, &d| {
        total.saturating_add(purse.get(d).saturating_mul(d.value_in_copper()))
    })
}

/// Whether `current` can absorb `deltas` without going into debt.
pub fn can_afford(current: &CoinPurse, deltas: &CoinPurse) -> bool {
    to_copper(current).saturating_add(to_copper(deltas)) >= 0
}

/// Add `deltas` to `current`, breaking higher coins to cover any shortfall.
///
/// Denominations are settled from copper upward. A negative count borrows
/// from the cheapest higher coin on hand whose breaking chain leads down to
/// it, breaking only as many coins as each link needs, so existing coins are
/// never consolidated. A
/// shortfall no higher coin can reach (electrum, or gold once platinum is
/// gone) is carried down into the next-lower denomination and settled there.
///
/// Affordability is not checked. When total funds are insufficient the
/// uncovered denomination is left negative; use [`try_apply_deltas`] to get
/// an error instead.
pub fn apply_deltas_with_change(current: &CoinPurse, deltas: &CoinPurse) -> CoinPurse {
    let mut purse = *current + *deltas;
    let funded = to_copper(&purse) >= 0;
    for target in Denomination::ALL {
        settle(&mut purse, target, funded);
    }
    purse
}

/// Like [`apply_deltas_with_change`], but rejects a transaction the purse
/// cannot cover and leaves nothing negative.
pub fn try_apply_deltas(current: &CoinPurse, deltas: &CoinPurse) -> Result<CoinPurse, LedgerError> {
    if !can_afford(current, deltas) {
        return Err(LedgerError::InsufficientFunds {
            needed: to_copper(deltas).saturating_neg(),
            available: to_copper(current),
        });
    }
    Ok(apply_deltas_with_change(current, deltas))
}

fn settle(purse: &mut CoinPurse, target: Denomination, funded: bool) {
    while purse.get(target) < 0 {
        if let Some(source) = borrow_source(purse, target) {
            let needed = units_needed(source, target, -purse.get(target));
            break_coins(purse, source, needed.min(purse.get(source)));
            continue;
        }
        match target.breaks_into() {
            Some((lower, rate)) if funded => {
                let deficit = purse.get(target);
                *purse.get_mut(target) = 0;
                let carried = purse.get(lower).saturating_add(deficit.saturating_mul(rate));
                *purse.get_mut(lower) = carried;
                tracing::trace!(from = %target, into = %lower, deficit, "carried shortfall down");
                settle(purse, lower, funded);
            }
            _ => {
                tracing::warn!(
                    denomination = %target,
                    count = purse.get(target),
                    "insufficient funds, leaving denomination negative"
                );
                return;
            }
        }
    }
}

fn borrow_source(purse: &CoinPurse, target: Denomination) -> Option<Denomination> {
    Denomination::ALL
        .into_iter()
        .filter(|&d| d > target)
        .find(|&d| purse.get(d) > 0 && d.reaches(target))
}

/// Units of `source` that cover `deficit` units of `target` along the
/// break chain, rounding up at every link.
fn units_needed(source: Denomination, target: Denomination, deficit: i64) -> i64 {
    let mut rates = Vec::new();
    let mut step = source;
    while step != target {
        let Some((lower, rate)) = step.breaks_into() else {
            break;
        };
        rates.push(rate);
        step = lower;
    }
    rates
        .iter()
        .rev()
        .fold(deficit, |need, &rate| need / rate + i64::from(need % rate != 0))
}

/// Break `count` coins of `source` into its immediate lower neighbor.
fn break_coins(purse: &mut CoinPurse, source: Denomination, count: i64) {
    let Some((lower, rate)) = source.breaks_into() else {
        return;
    };
    *purse.get_mut(source) -= count;
    let broken = purse.get(lower).saturating_add(count.saturating_mul(rate));
    *purse.get_mut(lower) = broken;
    tracing::trace!(from = %source, into = %lower, count, rate, "broke coins");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend_cp(current: CoinPurse, amount: i64) -> CoinPurse {
        apply_deltas_with_change(&current, &CoinPurse::of(Denomination::Cp, -amount))
    }

    #[test]
    fn test_to_copper() {
        assert_eq!(to_copper(&CoinPurse::new(1, 1, 1, 1, 1)), 1161);
        assert_eq!(to_copper(&CoinPurse::default()), 0);
        assert_eq!(CoinPurse::new(0, -1, 0, 5, 0).total_copper(), -50);
    }

    #[test]
    fn test_no_consolidation() {
        let result = spend_cp(CoinPurse::of(Denomination::Gp, 100), 1);
        assert_eq!(result, CoinPurse::new(0, 99, 0, 9, 9));
    }

    #[test]
    fn test_borrow_chains() {
        assert_eq!(
            spend_cp(CoinPurse::of(Denomination::Sp, 1), 1),
            CoinPurse::new(0, 0, 0, 0, 9)
        );
        assert_eq!(
            spend_cp(CoinPurse::of(Denomination::Ep, 1), 1),
            CoinPurse::new(0, 0, 0, 4, 9)
        );
        assert_eq!(
            spend_cp(CoinPurse::of(Denomination::Gp, 1), 1),
            CoinPurse::new(0, 0, 0, 9, 9)
        );
        assert_eq!(
            spend_cp(CoinPurse::of(Denomination::Pp, 1), 1),
            CoinPurse::new(0, 9, 0, 9, 9)
        );
    }

    #[test]
    fn test_exact_change() {
        let result = spend_cp(CoinPurse::new(0, 10, 0, 5, 7), 7);
        assert_eq!(result, CoinPurse::new(0, 10, 0, 5, 0));
    }

    #[test]
    fn test_cheapest_source_first() {
        // Silver covers the copper before electrum or gold is touched.
        let result = spend_cp(CoinPurse::new(0, 1, 1, 1, 0), 3);
        assert_eq!(result, CoinPurse::new(0, 1, 1, 0, 7));
    }

    #[test]
    fn test_electrum_shortfall_carried_into_silver() {
        let result = apply_deltas_with_change(
            &CoinPurse::of(Denomination::Gp, 1),
            &CoinPurse::of(Denomination::Ep, -1),
        );
        assert_eq!(result, CoinPurse::of(Denomination::Sp, 5));
    }

    #[test]
    fn test_gold_shortfall_paid_in_silver() {
        let result = apply_deltas_with_change(
            &CoinPurse::of(Denomination::Sp, 20),
            &CoinPurse::of(Denomination::Gp, -1),
        );
        assert_eq!(result, CoinPurse::of(Denomination::Sp, 10));
    }

    #[test]
    fn test_insufficient_funds_stays_negative() {
        let result = apply_deltas_with_change(
            &CoinPurse::of(Denomination::Sp, 5),
            &CoinPurse::of(Denomination::Gp, -1),
        );
        assert_eq!(result, CoinPurse::new(0, -1, 0, 5, 0));
        assert!(!result.is_settled());
    }

    #[test]
    fn test_gains_are_added_as_is() {
        let result = apply_deltas_with_change(
            &CoinPurse::new(0, 3, 0, 0, 0),
            &CoinPurse::new(1, 0, 2, 0, 15),
        );
        assert_eq!(result, CoinPurse::new(1, 3, 2, 0, 15));
    }

    #[test]
    fn test_try_apply_deltas() {
        let purse = CoinPurse::of(Denomination::Gp, 2);
        let err = try_apply_deltas(&purse, &CoinPurse::of(Denomination::Gp, -3)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                needed: 300,
                available: 200
            }
        );

        let ok = try_apply_deltas(&purse, &CoinPurse::of(Denomination::Sp, -15)).unwrap();
        assert_eq!(ok, CoinPurse::new(0, 0, 0, 5, 0));
        assert!(can_afford(&purse, &CoinPurse::of(Denomination::Gp, -2)));
    }

    #[test]
    fn test_display_and_parse() {
        let purse = CoinPurse::new(0, 3, 0, 5, 0);
        assert_eq!(purse.to_string(), "3 gp, 5 sp");
        assert_eq!("3 gp, 5 sp".parse::<CoinPurse>().unwrap(), purse);
        assert_eq!(CoinPurse::default().to_string(), "0 cp");
        assert_eq!("2 gold, 1 gp".parse::<CoinPurse>().unwrap().gp, 3);
        assert!(matches!(
            "4 doubloons".parse::<CoinPurse>(),
            Err(LedgerError::UnknownDenomination(_))
        ));
        assert!(matches!(
            "lots gp".parse::<CoinPurse>(),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_denomination_chain() {
        assert!(Denomination::Pp.reaches(Denomination::Cp));
        assert!(!Denomination::Gp.reaches(Denomination::Ep));
        assert_eq!(Denomination::Ep.breaks_into(), Some((Denomination::Sp, 5)));
        assert_eq!("Platinum".parse::<Denomination>().unwrap(), Denomination::Pp);
        assert_eq!(
            Denomination::ALL.map(Denomination::value_in_copper),
            [1, 10, 50, 100, 1000]
        );
    }

    #[test]
    fn test_large_spend_breaks_coins_in_bulk() {
        let started = std::time::Instant::now();
        let result = apply_deltas_with_change(
            &CoinPurse::of(Denomination::Pp, 10_000_000),
            &CoinPurse::of(Denomination::Cp, -9_000_000_000),
        );
        assert_eq!(result, CoinPurse::of(Denomination::Pp, 1_000_000));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_bulk_breaking_matches_single_coins() {
        // Silver already in debt is refilled before copper draws on it.
        let result = apply_deltas_with_change(
            &CoinPurse::new(0, 10, 0, 0, 0),
            &CoinPurse::new(0, 0, 0, -3, -100),
        );
        assert_eq!(result, CoinPurse::new(0, 8, 0, 7, 0));

        let result = spend_cp(CoinPurse::new(3, 0, 2, 1, 0), 137);
        assert_eq!(result, CoinPurse::new(2, 9, 0, 7, 3));
        assert_eq!(to_copper(&result), 3000 + 100 + 10 - 137);
    }

    #[test]
    fn test_units_needed_rounds_up_per_link() {
        assert_eq!(units_needed(Denomination::Sp, Denomination::Cp, 25), 3);
        assert_eq!(units_needed(Denomination::Pp, Denomination::Cp, 1001), 2);
        assert_eq!(units_needed(Denomination::Ep, Denomination::Cp, 51), 2);
        assert_eq!(units_needed(Denomination::Gp, Denomination::Sp, 10), 1);
    }

    #[test]
    fn test_extreme_counts_saturate() {
        let huge = CoinPurse::of(Denomination::Pp, i64::MAX / 100);
        assert_eq!(to_copper(&huge), i64::MAX);
        let topped = CoinPurse::of(Denomination::Pp, i64::MAX) + CoinPurse::of(Denomination::Pp, 1);
        assert_eq!(topped.pp, i64::MAX);
        assert_eq!((-CoinPurse::of(Denomination::Cp, i64::MIN)).cp, i64::MAX);
        assert!(can_afford(&huge, &CoinPurse::of(Denomination::Gp, -1)));
        let parsed: CoinPurse = format!("{} gp, 1 gp", i64::MAX).parse().unwrap();
        assert_eq!(parsed.gp, i64::MAX);
    }

    #[test]
    fn test_add_and_neg() {
        let a = CoinPurse::new(1, 2, 3, 4, 5);
        assert!((a + -a).is_empty());
        assert_eq!((-a).gp, -2);
    }
}
