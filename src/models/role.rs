use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Roles cerrados del backend. El backend los emite a veces como id numérico
/// (1..=4) y a veces como string según el endpoint; aquí se normalizan una
/// sola vez al deserializar y el resto de la app solo ve este enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    ProductManager,
    OrderManager,
    InventoryManager,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::ProductManager,
        Role::OrderManager,
        Role::InventoryManager,
    ];

    /// Id numérico que usa el backend en `role_id`.
    pub fn id(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::ProductManager => 2,
            Role::OrderManager => 3,
            Role::InventoryManager => 4,
        }
    }

    pub fn from_id(id: u64) -> Option<Role> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::ProductManager),
            3 => Some(Role::OrderManager),
            4 => Some(Role::InventoryManager),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "Admin" | "admin" => Some(Role::Admin),
            "ProductManager" | "product_manager" => Some(Role::ProductManager),
            "OrderManager" | "order_manager" => Some(Role::OrderManager),
            "InventoryManager" | "inventory_manager" => Some(Role::InventoryManager),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProductManager => "ProductManager",
            Role::OrderManager => "OrderManager",
            Role::InventoryManager => "InventoryManager",
        }
    }

    /// Etiqueta para la UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::ProductManager => "Product Manager",
            Role::OrderManager => "Order Manager",
            Role::InventoryManager => "Inventory Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct RoleVisitor;

impl<'de> Visitor<'de> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a role id (1..=4) or a role name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Role, E> {
        Role::from_id(value).ok_or_else(|| E::custom(format!("unknown role id {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Role, E> {
        u64::try_from(value)
            .ok()
            .and_then(Role::from_id)
            .ok_or_else(|| E::custom(format!("unknown role id {}", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Role, E> {
        Role::from_name(value).ok_or_else(|| E::custom(format!("unknown role '{}'", value)))
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
        deserializer.deserialize_any(RoleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_roles() {
        let role: Role = serde_json::from_str("3").unwrap();
        assert_eq!(role, Role::OrderManager);
    }

    #[test]
    fn parses_string_roles() {
        let role: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(role, Role::Admin);

        let role: Role = serde_json::from_str("\"inventory_manager\"").unwrap();
        assert_eq!(role, Role::InventoryManager);
    }

    #[test]
    fn rejects_unknown_roles() {
        assert!(serde_json::from_str::<Role>("9").is_err());
        assert!(serde_json::from_str::<Role>("\"SuperUser\"").is_err());
    }

    #[test]
    fn ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(u64::from(role.id())), Some(role));
        }
    }
}
