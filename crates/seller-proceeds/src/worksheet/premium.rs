use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::domain::Money;

/// One band of the owner's title insurance rate schedule.
///
/// An amount inside the band costs `base` plus `rate_per_thousand` for every
/// $1,000 above `floor`, with that marginal charge rounded up to the next
/// whole dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumBand {
    /// Inclusive upper bound of the band; `None` for the open top band.
    pub ceiling: Option<Money>,
    pub floor: Money,
    pub base: Money,
    pub rate_per_thousand: Decimal,
}

impl PremiumBand {
    fn premium(&self, amount: Money) -> Money {
        let marginal = (amount - self.floor) / dec!(1000) * self.rate_per_thousand;
        self.base + marginal.ceil()
    }
}

const STANDARD_BANDS: [PremiumBand; 6] = [
    PremiumBand {
        ceiling: Some(dec!(20000)),
        floor: dec!(0),
        base: dec!(400),
        rate_per_thousand: dec!(0),
    },
    PremiumBand {
        ceiling: Some(dec!(100000)),
        floor: dec!(20000),
        base: dec!(400),
        rate_per_thousand: dec!(6),
    },
    PremiumBand {
        ceiling: Some(dec!(200000)),
        floor: dec!(100000),
        base: dec!(880),
        rate_per_thousand: dec!(4.25),
    },
    PremiumBand {
        ceiling: Some(dec!(300000)),
        floor: dec!(200000),
        base: dec!(1305),
        rate_per_thousand: dec!(3.5),
    },
    PremiumBand {
        ceiling: Some(dec!(1000000)),
        floor: dec!(300000),
        base: dec!(1655),
        rate_per_thousand: dec!(3),
    },
    PremiumBand {
        ceiling: None,
        floor: dec!(1000000),
        base: dec!(3755),
        rate_per_thousand: dec!(2.5),
    },
];

/// Marginal-rate schedule for the owner's title insurance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumSchedule {
    /// Added to the selling price before a band is selected.
    pub price_offset: Money,
    /// Charged when the offset price does not exceed the first band's floor.
    pub minimum: Money,
    bands: &'static [PremiumBand],
}

impl PremiumSchedule {
    /// The six-band schedule used for residential sales.
    pub const STANDARD: PremiumSchedule = PremiumSchedule {
        price_offset: dec!(200),
        minimum: dec!(400),
        bands: &STANDARD_BANDS,
    };

    pub const fn standard() -> Self {
        Self::STANDARD
    }

    pub fn bands(&self) -> &[PremiumBand] {
        self.bands
    }

    /// Applies the highest band whose floor lies below `selling_price` plus
    /// the offset. A band's ceiling charges the same as the next band's
    /// floor, so only floors decide. Non-positive amounts pay the minimum.
    pub fn premium_for(&self, selling_price: Money) -> Money {
        let amount = selling_price.saturating_add(self.price_offset);
        self.bands
            .iter()
            .rev()
            .find(|band| amount > band.floor)
            .map_or(self.minimum, |band| band.premium(amount))
    }
}

/// Owner's title insurance premium for a sale at `selling_price` under the
/// standard schedule.
pub fn compute_title_premium(selling_price: Money) -> Money {
    PremiumSchedule::STANDARD.premium_for(selling_price)
}
