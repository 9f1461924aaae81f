use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct ItemId(pub u32);

/// Catalog record. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, parse_display::Display)]
#[display("item=(id={id} price={price})")]
pub struct Item {
    id: ItemId,
    price: Price,
}

impl Item {
    pub const fn new(id: ItemId, price: Price) -> Self {
        Self { id, price }
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub const fn price(&self) -> Price {
        self.price
    }
}

/// This permits to avoid checks on negative prices while summing spend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, parse_display::Display)]
#[display("{0}")]
pub struct Price(Decimal);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must be non-negative value={value}")]
    Negative { value: Decimal },
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative { value });
        }
        Ok(Self(value))
    }
}

impl Price {
    pub const fn as_inner(&self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(decimal).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}
