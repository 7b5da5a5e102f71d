//! Shared domain enums, stored as text columns

use serde::{Deserialize, Serialize};
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
    Decode, Encode, Postgres, Type,
};
use utoipa::ToSchema;

/// Implements slug conversion and SQLx text mapping for a fieldless enum.
macro_rules! text_enum {
    ($ty:ident { $($variant:ident => $slug:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $slug,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok($ty::$variant),)+
                    _ => Err(format!("Invalid {} value: {}", stringify!($ty), s)),
                }
            }
        }

        impl Type<Postgres> for $ty {
            fn type_info() -> PgTypeInfo {
                <String as Type<Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <String as Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
                let s = <&'r str as Decode<'r, Postgres>>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

/// Role of a user within the organisation.
///
/// Descriptive only: admin checks use the `is_admin` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Admin,
    Manager,
    Inspector,
    MaintenanceWorker,
    RepairTech,
    #[default]
    User,
    Archived,
}

text_enum!(UserType {
    Admin => "admin",
    Manager => "manager",
    Inspector => "inspector",
    MaintenanceWorker => "maintenance_worker",
    RepairTech => "repair_tech",
    User => "user",
    Archived => "archived",
});

/// Fire classes an extinguisher is rated for (US classification)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum FireClass {
    /// Ordinary solid combustibles
    A,
    /// Flammable liquids and gases
    B,
    /// Energized electrical equipment
    C,
    /// Combustible metals
    D,
    /// Oils and fats
    K,
    /// Multi-purpose dry chemical
    #[default]
    #[serde(rename = "ABC")]
    Abc,
    #[serde(rename = "other")]
    Other,
}

text_enum!(FireClass {
    A => "A",
    B => "B",
    C => "C",
    D => "D",
    K => "K",
    Abc => "ABC",
    Other => "other",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Inspect,
    DamagedExt,
    RepairExt,
    DamagedBox,
    RepairBox,
    #[default]
    Other,
}

text_enum!(TicketType {
    Inspect => "inspect",
    DamagedExt => "damaged_ext",
    RepairExt => "repair_ext",
    DamagedBox => "damaged_box",
    RepairBox => "repair_box",
    Other => "other",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    #[default]
    Open,
    InProgress,
    Closed,
    Archived,
}

text_enum!(TicketState {
    Open => "open",
    InProgress => "in_progress",
    Closed => "closed",
    Archived => "archived",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_serde_names() {
        for class in [
            FireClass::A,
            FireClass::B,
            FireClass::C,
            FireClass::D,
            FireClass::K,
            FireClass::Abc,
            FireClass::Other,
        ] {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.as_str()));
        }

        let json = serde_json::to_string(&UserType::MaintenanceWorker).unwrap();
        assert_eq!(json, "\"maintenance_worker\"");
        assert_eq!(TicketState::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!("repair_tech".parse::<UserType>(), Ok(UserType::RepairTech));
        assert_eq!("ABC".parse::<FireClass>(), Ok(FireClass::Abc));
        assert!("abc".parse::<FireClass>().is_err());
        assert!("superuser".parse::<UserType>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(UserType::default(), UserType::User);
        assert_eq!(FireClass::default(), FireClass::Abc);
        assert_eq!(TicketType::default(), TicketType::Other);
        assert_eq!(TicketState::default(), TicketState::Open);
    }
}
