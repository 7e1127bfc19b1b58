//! Terminal rendering of results and facet availability.

use anyhow::Result;
use console::style;
use island_browse::Session;
use island_facets::Facet;
use serde_json::json;

pub(crate) fn results(session: &Session, json_output: bool) -> Result<()> {
    let results = session.results();

    if json_output {
        let islands: Vec<_> = results
            .iter()
            .map(|row| {
                json!({
                    "id": row.island.id,
                    "name": row.island.name,
                    "atoll": row.island.atoll.label(),
                    "reason": row.reason,
                })
            })
            .collect();
        let payload = json!({
            "status": session.status(),
            "error": session.error_message(),
            "active_filters": session.active_filter_count(),
            "count": islands.len(),
            "islands": islands,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if let Some(message) = session.error_message() {
        println!("{}", style(message).red());
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", style("No islands match the exact criteria.").yellow());
        println!("Try removing some filters or asking the AI for suggestions.");
        return Ok(());
    }

    if session.has_active_filters_or_ai() {
        let noun = if results.len() == 1 { "island" } else { "islands" };
        println!("{}", style(format!("{} {noun} found", results.len())).bold());
    } else {
        println!(
            "{}",
            style(format!("Choose from {} local islands", results.len())).bold()
        );
    }

    for row in &results {
        let island = row.island;
        println!(
            "\n{}  {}",
            style(&island.name).cyan().bold(),
            style(island.atoll.label()).dim()
        );
        if let Some(reason) = row.reason {
            println!("  {} \"{reason}\"", style("AI:").green());
        }
        println!("  {}", island.description);
        println!(
            "  {} · {} · nightlife: {} · jungle: {}",
            island.size.label(),
            island.ferry_access.label(),
            island.nightlife.label(),
            island.jungle.label(),
        );

        let activities: Vec<String> = island
            .marine_activities
            .iter()
            .map(|&activity| {
                if island.is_seasonal(activity) {
                    format!("{} (seasonal)", activity.label())
                } else {
                    activity.label().to_string()
                }
            })
            .collect();
        if !activities.is_empty() {
            println!("  marine: {}", activities.join(", "));
        }

        let mut features = Vec::new();
        if island.has_sandbank_attached {
            features.push(if island.sandbank_is_seasonal {
                "attached sandbank (seasonal)"
            } else {
                "attached sandbank"
            });
        }
        if island.has_floating_bar {
            features.push("floating bar nearby");
        }
        if !features.is_empty() {
            println!("  features: {}", features.join(", "));
        }
    }

    Ok(())
}

pub(crate) fn facets(session: &Session, json_output: bool) -> Result<()> {
    let availability = session.availability();
    let selection = session.selection();

    if json_output {
        let mut payload = serde_json::Map::new();
        for (facet, values) in availability.iter() {
            let labels: Vec<&str> = values.iter().map(|v| v.label()).collect();
            payload.insert(facet.name().to_string(), json!(labels));
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(payload))?
        );
        return Ok(());
    }

    for facet in Facet::SELECTABLE {
        println!("\n{}", style(facet.name()).bold());
        for value in facet.options() {
            // Hidden: unreachable and not selected.
            if !availability.is_visible(value, selection) {
                continue;
            }
            let marker = if selection.contains(value) { "[x]" } else { "[ ]" };
            let line = format!("  {marker} {}", value.label());
            if availability.is_available(value) {
                println!("{line}");
            } else {
                // Still selected, no longer reachable: visible but dimmed.
                println!("{}", style(line).dim());
            }
        }
    }

    Ok(())
}
