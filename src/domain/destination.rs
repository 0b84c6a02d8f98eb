use serde_json::{Number, Value};

/// One fare row as persisted: the destination identity of the enclosing
/// entry paired with a single origin/price quote. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    pub destination_city: String,
    pub destination_country: String,
    pub origin_name: String,
    pub price: Number,
}

/// Flattens destination entries into fare rows, one per (entry, quote)
/// pair, in input order. An entry missing its identity is skipped whole; a
/// malformed quote is skipped alone and its siblings still emit.
pub fn flatten_destination_entries(entries: &[Value]) -> Vec<FlatRecord> {
    let mut records = vec![];

    for entry in entries {
        let Some((destination_city, destination_country)) = extract_destination_identity(entry)
        else {
            log::warn!("Skipping destination entry with missing city or country name");
            continue;
        };

        let Some(quotes) = entry.get("prices").and_then(Value::as_array) else {
            log::warn!("Skipping destination {}: no prices array", destination_city);
            continue;
        };

        for quote in quotes {
            match extract_fare_quote(quote) {
                Some((origin_name, price)) => records.push(FlatRecord {
                    destination_city: destination_city.clone(),
                    destination_country: destination_country.clone(),
                    origin_name,
                    price,
                }),
                None => log::warn!(
                    "Skipping malformed fare quote for destination {}",
                    destination_city
                ),
            }
        }
    }

    records
}

fn extract_destination_identity(entry: &Value) -> Option<(String, String)> {
    let city = entry.get("destination_city")?.get("name")?.as_str()?;
    let country = entry.get("destination_country")?.get("name")?.as_str()?;

    Some((city.to_string(), country.to_string()))
}

// Price must be a finite, non-negative number. The source representation is
// kept so integer fares serialize without a fractional suffix.
fn extract_fare_quote(quote: &Value) -> Option<(String, Number)> {
    let origin_name = quote.get("origin_name")?.as_str()?;

    let Value::Number(price) = quote.get("price")?.get("value")? else {
        return None;
    };
    let value = price.as_f64()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    Some((origin_name.to_string(), price.clone()))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::flatten_destination_entries;

    fn dubai_entry() -> Value {
        json!({
            "destination_city": { "name": "Дубай" },
            "destination_country": { "name": "ОАЭ" },
            "prices": [
                { "origin_name": "Москва", "price": { "value": 12000 } },
                { "origin_name": "Санкт-Петербург", "price": { "value": 14500 } },
            ],
        })
    }

    #[test]
    fn one_record_per_quote_copying_the_destination_identity() {
        let records = flatten_destination_entries(&[dubai_entry()]);

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.destination_city, "Дубай");
            assert_eq!(record.destination_country, "ОАЭ");
        }
        assert_eq!(records[0].origin_name, "Москва");
        assert_eq!(records[0].price.to_string(), "12000");
        assert_eq!(records[1].origin_name, "Санкт-Петербург");
        assert_eq!(records[1].price.to_string(), "14500");
    }

    #[test]
    fn output_follows_input_order_across_entries() {
        let entries = [
            json!({
                "destination_city": { "name": "Сочи" },
                "destination_country": { "name": "Россия" },
                "prices": [{ "origin_name": "Москва", "price": { "value": 5000 } }],
            }),
            dubai_entry(),
        ];

        let records = flatten_destination_entries(&entries);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].destination_city, "Сочи");
        assert_eq!(records[1].destination_city, "Дубай");
        assert_eq!(records[2].destination_city, "Дубай");
    }

    #[test]
    fn malformed_quote_is_dropped_and_siblings_still_emit() {
        let entry = json!({
            "destination_city": { "name": "Стамбул" },
            "destination_country": { "name": "Турция" },
            "prices": [
                { "origin_name": "Москва" },
                { "origin_name": "Казань", "price": { "value": "12000" } },
                { "origin_name": "Сочи", "price": { "value": -100 } },
                { "origin_name": "Москва", "price": { "value": 9900 } },
            ],
        });

        let records = flatten_destination_entries(&[entry]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].origin_name, "Москва");
        assert_eq!(records[0].price.to_string(), "9900");
    }

    #[test]
    fn entry_missing_identity_is_skipped_and_siblings_continue() {
        let entries = [
            json!({
                "destination_city": { "name": "Баку" },
                "prices": [{ "origin_name": "Москва", "price": { "value": 8000 } }],
            }),
            dubai_entry(),
        ];

        let records = flatten_destination_entries(&entries);

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.destination_city == "Дубай"));
    }

    #[test]
    fn entry_with_empty_prices_contributes_nothing() {
        let entry = json!({
            "destination_city": { "name": "Ереван" },
            "destination_country": { "name": "Армения" },
            "prices": [],
        });

        assert!(flatten_destination_entries(&[entry]).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(flatten_destination_entries(&[]).is_empty());
    }

    #[test]
    fn flattening_is_idempotent() {
        let entries = [dubai_entry()];

        let first = flatten_destination_entries(&entries);
        let second = flatten_destination_entries(&entries);

        assert_eq!(first, second);
    }

    #[test]
    fn fractional_prices_keep_their_representation() {
        let entry = json!({
            "destination_city": { "name": "Минск" },
            "destination_country": { "name": "Беларусь" },
            "prices": [{ "origin_name": "Москва", "price": { "value": 7450.5 } }],
        });

        let records = flatten_destination_entries(&[entry]);

        assert_eq!(records[0].price.to_string(), "7450.5");
    }
}
