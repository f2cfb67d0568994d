//! Checkout preference payload.
//!
//! A preference is the provider's definition of a hosted checkout session:
//! what is being bought, who is paying, and where to send the buyer back to.
//! The same type is decoded from inbound requests and serialized to the
//! provider, so the serde names here are the provider's wire names.
//!
//! Absent and `null` fields decode to their empty value so that
//! [`Preference::validate`], not decoding, reports them. Fields of the wrong
//! JSON type fail decoding.

use serde::{Deserialize, Deserializer, Serialize};

use super::validation::{field_path, Rule, ValidationErrors};

/// A checkout preference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    /// Items being purchased. `None` when the field was absent or `null`.
    #[serde(
        default,
        deserialize_with = "items_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<Item>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub payer: Payer,

    /// Return URLs after checkout.
    #[serde(default, rename = "back_urls", deserialize_with = "null_as_default")]
    pub redirect: Redirect,

    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_return: bool,
}

/// A purchased item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub picture_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price: f64,
}

/// The buyer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payer {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub surname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: Phone,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(rename = "date_created", deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phone {
    #[serde(deserialize_with = "null_as_default")]
    pub area_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: i64,
}

/// Where the provider redirects the buyer after checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redirect {
    #[serde(deserialize_with = "null_as_default")]
    pub success: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pending: String,
    #[serde(deserialize_with = "null_as_default")]
    pub failure: String,
}

/// Decodes `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` items list stays `None`; `null` entries become empty items.
fn items_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Item>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<Item>>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(Option::unwrap_or_default).collect()))
}

impl Preference {
    /// Checks every required field.
    ///
    /// Violations are reported in declaration order: items first (the list
    /// itself, then each item by index), then the payer.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.items {
            None => errors.push("items", Rule::Required),
            Some(items) if items.is_empty() => errors.push("items", Rule::Min(1)),
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    item.collect_violations(&format!("items[{}]", index), &mut errors);
                }
            }
        }

        self.payer.collect_violations("payer", &mut errors);

        errors.into_result()
    }
}

impl Item {
    fn collect_violations(&self, path: &str, errors: &mut ValidationErrors) {
        errors.require_text(field_path(path, "title"), &self.title);
        errors.require_non_zero_int(field_path(path, "quantity"), self.quantity);
        errors.require_non_zero_float(field_path(path, "unit_price"), self.unit_price);
    }
}

impl Payer {
    fn collect_violations(&self, path: &str, errors: &mut ValidationErrors) {
        errors.require_text(field_path(path, "name"), &self.name);
        errors.require_text(field_path(path, "email"), &self.email);
        errors.require_text(field_path(path, "phone.number"), &self.phone.number);
        errors.require_text(field_path(path, "address.street"), &self.address.street);
        errors.require_non_zero_int(field_path(path, "address.number"), self.address.number);
        errors.require_text(field_path(path, "date_created"), &self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_preference() -> Preference {
        Preference {
            items: Some(vec![Item {
                title: "sherlock".to_string(),
                description: "holmes".to_string(),
                picture_url: String::new(),
                quantity: 1,
                unit_price: 15.75,
            }]),
            payer: Payer {
                name: "mateo".to_string(),
                surname: "fc".to_string(),
                email: "m@gmail.com".to_string(),
                phone: Phone {
                    area_code: String::new(),
                    number: "12345".to_string(),
                },
                address: Address {
                    zip_code: String::new(),
                    street: "pepe".to_string(),
                    number: 1234,
                },
                created_at: "14-06-2020".to_string(),
            },
            redirect: Redirect {
                success: "http://baseurl.com/success".to_string(),
                pending: "http://baseurl.com/pending".to_string(),
                failure: "http://baseurl.com/failure".to_string(),
            },
            auto_return: true,
        }
    }

    fn messages(preference: &Preference) -> Vec<String> {
        preference
            .validate()
            .unwrap_err()
            .violations()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn valid_preference_passes() {
        assert!(valid_preference().validate().is_ok());
    }

    #[test]
    fn missing_items_is_required_violation() {
        let preference = Preference {
            items: None,
            ..valid_preference()
        };
        assert_eq!(messages(&preference), vec!["items: required failed"]);
    }

    #[test]
    fn empty_items_is_min_violation() {
        let preference = Preference {
            items: Some(vec![]),
            ..valid_preference()
        };
        assert_eq!(messages(&preference), vec!["items: min=1 failed"]);
    }

    #[test]
    fn empty_payer_reports_every_required_field_in_order() {
        let preference = Preference {
            payer: Payer::default(),
            ..valid_preference()
        };
        assert_eq!(
            messages(&preference),
            vec![
                "payer.name: required failed",
                "payer.email: required failed",
                "payer.phone.number: required failed",
                "payer.address.street: required failed",
                "payer.address.number: required failed",
                "payer.date_created: required failed",
            ]
        );
    }

    #[test]
    fn item_violations_carry_index_and_precede_payer() {
        let mut preference = valid_preference();
        let mut broken = preference.items.as_ref().unwrap()[0].clone();
        broken.unit_price = 0.0;
        broken.title = String::new();
        preference.items.as_mut().unwrap().push(broken);
        preference.payer.email = String::new();

        assert_eq!(
            messages(&preference),
            vec![
                "items[1].title: required failed",
                "items[1].unit_price: required failed",
                "payer.email: required failed",
            ]
        );
    }

    #[test]
    fn absent_fields_decode_to_empty_values() {
        let preference: Preference = serde_json::from_value(json!({
            "items": [{"title": "book", "quantity": 1}],
        }))
        .unwrap();

        let items = preference.items.as_ref().unwrap();
        assert_eq!(items[0].unit_price, 0.0);
        assert_eq!(preference.payer, Payer::default());
        assert!(!preference.auto_return);
    }

    #[test]
    fn null_fields_decode_to_empty_values_and_fail_validation() {
        let preference: Preference = serde_json::from_value(json!({
            "items": [{"title": null, "quantity": 1, "unit_price": 1.0}],
            "payer": null,
            "back_urls": null,
            "auto_return": null,
        }))
        .unwrap();

        assert_eq!(preference.payer, Payer::default());
        assert_eq!(preference.redirect, Redirect::default());
        assert_eq!(
            messages(&preference),
            vec![
                "items[0].title: required failed",
                "payer.name: required failed",
                "payer.email: required failed",
                "payer.phone.number: required failed",
                "payer.address.street: required failed",
                "payer.address.number: required failed",
                "payer.date_created: required failed",
            ]
        );
    }

    #[test]
    fn null_nested_values_are_required_violations() {
        let mut value = serde_json::to_value(valid_preference()).unwrap();
        value["items"][0]["quantity"] = json!(null);
        value["payer"]["phone"] = json!(null);
        value["payer"]["address"]["number"] = json!(null);

        let preference: Preference = serde_json::from_value(value).unwrap();
        assert_eq!(
            messages(&preference),
            vec![
                "items[0].quantity: required failed",
                "payer.phone.number: required failed",
                "payer.address.number: required failed",
            ]
        );
    }

    #[test]
    fn null_items_list_is_required_and_null_entries_are_empty_items() {
        let preference: Preference =
            serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(preference.items.is_none());

        let preference: Preference =
            serde_json::from_value(json!({ "items": [null] })).unwrap();
        assert_eq!(preference.items, Some(vec![Item::default()]));
    }

    #[test]
    fn wrong_field_type_fails_decoding() {
        let result = serde_json::from_value::<Preference>(json!({
            "items": [{"title": "book", "quantity": "1", "unit_price": 1.5}],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_provider_field_names() {
        let value = serde_json::to_value(valid_preference()).unwrap();

        assert_eq!(value["items"][0]["unit_price"], json!(15.75));
        assert_eq!(value["items"][0]["picture_url"], json!(""));
        assert_eq!(value["payer"]["date_created"], json!("14-06-2020"));
        assert_eq!(value["payer"]["phone"]["number"], json!("12345"));
        assert_eq!(
            value["back_urls"]["failure"],
            json!("http://baseurl.com/failure")
        );
        assert_eq!(value["auto_return"], json!(true));
    }
}
