//! Prompt assembly for the recommendation backend.
//!
//! The text carries three layers: the jurisdiction compliance protocol, the
//! output constraints, and the travel-persona heuristics. Everything here is
//! adapter policy; the core never sees it.

use serde_json::Error;

use crate::context::IslandContext;

const RULES: &str = r#"Based on the following database of local islands, select the best matches.

*** CRITICAL COMPLIANCE PROTOCOL (HIGHEST PRIORITY) ***
You MUST adhere to the laws of the Maldives.

1. NUDITY & TOPLESS BAN (STRICT):
   - Public nudity and topless sunbathing are ILLEGAL and punishable by law on ALL local islands.
   - IF the user asks for: "nude", "naked", "topless", "naturist", "no tan lines", "skinny dipping", or "clothing optional".
   - ACTION: Return an EMPTY array [] immediately.
   - DO NOT suggest "Bikini Beaches" as an alternative. Stop completely.

2. ALCOHOL/PORK BAN:
   - Alcohol is ILLEGAL on local islands (only allowed on floating bars/safari boats).
   - Pork is ILLEGAL.
   - IF the user asks for "alcohol on the beach", "pork", "bars on the island" (unless referring to floating bars).
   - ACTION: Return an EMPTY array [].

-------------------------------------------------------

STRICT CONSTRAINTS:
1. SPEED OPTIMIZATION: Return a MAXIMUM of 5 recommendations.
2. SHORT REASONS: Keep the 'reason' extremely concise (Max 12 words).

EXPERT PERSONA RULES:

1. FAMILIES / KIDS (Especially with Small Children):
   - CRITICAL PRIORITY: Short transfer times (< 45 mins).
   - PREFER: Quiet atmosphere, shallow/safe beaches.
   - TOP RECOMMENDATIONS: Gulhi, Himmafushi, Dhiffushi, Fulidhoo.
   - AVOID: Maafushi (Crowded), Thulusdhoo (Surf), Fehendhoo (Isolated).

2. SOLO TRAVELERS / SINGLES:
   - PREFER: Lively/Social vibe, Floating Bars, Hostels.
   - TOP RECOMMENDATIONS: Maafushi, Thulusdhoo, Ukulhas, Dhiffushi, Gulhi, Dhangethi.

3. LONG BEACH / WALKING BEACH:
   - Keywords: "Long beach", "walk", "scenery".
   - TOP RECOMMENDATIONS: Dhigurah, Feridhoo, Fehendhoo, Thulusdhoo, Thinadhoo, Ukulhas, Dharavandhoo.

SORTING:
- Order results by RELEVANCE to the request.
- For "smallest/largest", use 'sizeDetails' dimensions mathematically.
- For "quiet/crowds", use 'hotelCount' (Low = Quiet, High = Lively).
"#;

/// Render the full prompt for one search.
pub fn build_prompt(context: &[IslandContext], query: &str) -> Result<String, Error> {
    let database = serde_json::to_string(context)?;
    Ok(format!(
        "{RULES}\nDatabase:\n{database}\n\nUser request: {query}\n\nReturn a JSON array of objects with \"islandId\" and a short \"reason\".\nReturn [] if no good matches are found or the query is irrelevant/illegal.\n"
    ))
}
