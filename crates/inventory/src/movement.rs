use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, MovementId, ProductId, ValueObject};

/// Kind of stock movement. Serialized uppercase; parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum MovementKind {
    /// Goods received (purchase, return from customer).
    In,
    /// Goods leaving (sale, loss).
    Out,
    /// Manual correction; quantity is a signed delta.
    Adjust,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::In => "IN",
            MovementKind::Out => "OUT",
            MovementKind::Adjust => "ADJUST",
        }
    }
}

impl ValueObject for MovementKind {}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(MovementKind::In),
            "OUT" => Ok(MovementKind::Out),
            "ADJUST" => Ok(MovementKind::Adjust),
            other => Err(DomainError::validation(format!(
                "unknown movement type '{other}' (expected IN, OUT or ADJUST)"
            ))),
        }
    }
}

impl TryFrom<String> for MovementKind {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ledger entry. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: record a movement against a product's current stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMovement {
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Result of handling a [`RecordMovement`]: the entry to append and the stock
/// level the product must be set to in the same transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementOutcome {
    pub movement: StockMovement,
    pub new_stock: i64,
}

impl RecordMovement {
    /// Signed change this movement applies to stock.
    pub fn stock_delta(&self) -> i64 {
        match self.kind {
            MovementKind::In | MovementKind::Adjust => self.quantity,
            MovementKind::Out => -self.quantity,
        }
    }

    /// Checks that do not depend on current stock (quantity sign per kind).
    pub fn validate(&self) -> DomainResult<()> {
        match self.kind {
            MovementKind::In | MovementKind::Out if self.quantity <= 0 => Err(
                DomainError::validation(format!("{} quantity must be positive", self.kind)),
            ),
            MovementKind::Adjust if self.quantity == 0 => {
                Err(DomainError::validation("ADJUST quantity cannot be zero"))
            }
            _ => Ok(()),
        }
    }

    /// Apply to `current_stock`, rejecting anything that would leave it negative.
    pub fn handle(&self, current_stock: i64) -> DomainResult<MovementOutcome> {
        self.validate()?;

        let new_stock = current_stock
            .checked_add(self.stock_delta())
            .ok_or_else(|| DomainError::invariant("stock overflow"))?;
        if new_stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        Ok(MovementOutcome {
            movement: StockMovement {
                id: MovementId::new(),
                product_id: self.product_id,
                kind: self.kind,
                quantity: self.quantity,
                reason: self.reason.trim().to_string(),
                created_at: self.occurred_at,
            },
            new_stock,
        })
    }
}
