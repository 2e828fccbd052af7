//! Formatting stage: free-form request -> structured dataset specification.

use anyhow::Result;

use crate::llm::TextGenerator;
use crate::script;

/// Turns a user's free-form dataset request into a structured specification
/// the script-generation stage can work from. The result is opaque text; no
/// schema is enforced beyond best-effort fence stripping.
pub async fn format_request(
    client: &impl TextGenerator,
    request: &str,
    dataset_file: &str,
) -> Result<String> {
    let prompt = format!(
        r#"You are a data specification agent tasked with transforming a user's dataset request into a clear, structured data generation plan for CSV output.

Given the user's request, produce:

1) Dataset Name: must be {dataset_file}
2) Number of Rows: infer the quantity of data from the request (default to 1000 rows if unspecified).
3) Columns Specification: for each column, define:
   - Column Name
   - Data Type (e.g., string, integer, float, date, boolean)
   - Example Values or Format (e.g., names, emails, dates in YYYY-MM-DD, integers between 1-100)
   - Constraints (if any, e.g., unique, non-null, within a range)
4) Special Notes: any requirements like relationships between columns, data distributions, or privacy needs (e.g., anonymization, realistic values).

The plan you produce goes to a model that generates a script from it, so keep the plan simplistic and ensure the final script always works.

User request:
"{request}"
"#
    );

    let text = client.generate(&prompt).await?;
    Ok(script::strip_json_fence(&text))
}
