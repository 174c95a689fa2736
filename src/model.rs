//! Entity records and the strength rating. Ids are assigned by PostgreSQL.

use serde::{Deserialize, Serialize};
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::Database;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Power {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct HeroPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

/// Partial update for a power. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PowerChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Input for a new join record. Strength is already validated.
#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

/// Rating of a hero's power, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Average,
    Strong,
}

#[derive(Debug, Error)]
#[error("invalid strength value")]
pub struct InvalidStrength;

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Average => "Average",
            Strength::Strong => "Strong",
        }
    }
}

impl FromStr for Strength {
    type Err = InvalidStrength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            "Strong" => Ok(Strength::Strong),
            _ => Err(InvalidStrength),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl sqlx::Type<Postgres> for Strength {
    fn type_info() -> PgTypeInfo {
        <&str as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for Strength {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, Postgres> for Strength {
    fn decode(value: PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}
