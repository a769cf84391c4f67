// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use formcast::config::CONFIG_FILE;
use formcast::{deferred_serializer_fn, Action, Body, Serialized, Serializers, SerializersConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows registry activity
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // This example demonstrates:
    // 1. Building a registry from formcast.toml (or the defaults)
    // 2. Adding a custom deferred serializer
    // 3. Serializing one action under every registered media type

    let config = SerializersConfig::load(CONFIG_FILE)?;
    let mut serializers = Serializers::from_config(&config)?;

    serializers.set(
        "application/json",
        deferred_serializer_fn(|action| {
            let pairs = formcast::to_name_value_pairs(&formcast::to_entry_list(action));
            async move {
                let object: serde_json::Map<String, serde_json::Value> = pairs
                    .into_iter()
                    .map(|(name, value)| (name, serde_json::Value::String(value)))
                    .collect();
                Serialized::from(Body::from(serde_json::Value::Object(object).to_string()))
            }
        }),
    )?;

    let action = Action::from_json(serde_json::json!({
        "name": "add-item",
        "title": "Add Item",
        "method": "POST",
        "href": "http://api.x.io/orders/42/items",
        "fields": [
            { "name": "orderNumber", "type": "hidden", "value": 42 },
            { "name": "productCode", "type": "text", "value": "XYZ 1&2" },
            { "name": "quantity", "type": "number", "value": 3 },
            { "name": "giftWrap", "type": "checkbox", "value": true, "disabled": true },
            { "name": "extras", "type": "checkbox", "value": ["card", "ribbon"] }
        ]
    }))?;

    tracing::info!("{} {} (declared type {})", action.method, action.href, action.media_type());

    let media_types: Vec<String> = serializers.keys().map(str::to_string).collect();
    for media_type in media_types {
        let serialization = serializers.serialize_resolved(&media_type, &action).await?;
        let body = serialization.body.as_text().unwrap_or_default();

        println!("=== {} ===", serialization.media_type);
        println!("{}", body.escape_debug());
    }

    Ok(())
}
