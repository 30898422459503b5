use super::decimal::DecimalVisitor;
use crate::PermissionSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permission integers serialize as decimal strings, matching Discord's API.
impl Serialize for PermissionSet {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(DecimalVisitor {
            expecting: "a decimal permission string or unsigned integer",
        })
        .map(Self::from_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PERMISSIONS, Permission, lookup};
    use serde_json::json;

    #[test]
    fn permission_set_roundtrips_through_json() {
        let set = PermissionSet::from_bits((1 << 53) + 1);
        let value = serde_json::to_value(set).unwrap();
        assert_eq!(value, json!("9007199254740993"));
        assert_eq!(serde_json::from_value::<PermissionSet>(value).unwrap(), set);
        assert_eq!(
            serde_json::from_str::<PermissionSet>("2056").unwrap().bits(),
            2056
        );
    }

    #[test]
    fn catalog_entries_serialize_value_as_string() {
        let admin: &Permission = lookup(PERMISSIONS, "Administrator").unwrap();
        assert_eq!(
            serde_json::to_value(admin).unwrap(),
            json!({
                "name": "Administrator",
                "value": "8",
                "description": "Allows all permissions and bypasses channel permission overwrites"
            })
        );
    }
}
