//! Script-generation stage: specification -> dataset-generating program.

use anyhow::Result;

use crate::llm::TextGenerator;
use crate::script;

/// Asks the model for a complete, self-contained Python program that
/// generates synthetic data per `specification` and writes `dataset_file`.
/// The returned code is not parsed or validated here; a broken script
/// surfaces as an error result from the sandbox.
pub async fn generate_script(
    client: &impl TextGenerator,
    specification: &str,
    dataset_file: &str,
) -> Result<String> {
    let prompt = format!(
        r#"You are an expert Python data engineer. Your task is to write a complete Python script using pandas and numpy to generate a synthetic dataset as per the specification provided.

The script should:
- Import all necessary libraries (e.g., pandas, numpy)
- Generate realistic data respecting the column types, constraints, and relationships
- Use randomization, but follow constraints (e.g., value ranges, unique values where required)
- Handle any correlations or dependencies between columns as noted
- Use significant coefficients for scalars to ensure significant correlations
- Save the dataset as a CSV file called {dataset_file}
- Include no extra explanations, just the code

Dataset specification:
{specification}

Your output:
A Python script (as plain code, no formatting tags or comments) that generates the dataset and writes it to a CSV.
"#
    );

    let text = client.generate(&prompt).await?;
    Ok(script::strip_outer_fences(&text))
}
