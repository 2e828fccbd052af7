//! Visualization stage: dataset artifact -> plot-generating program.

use std::path::Path;

use anyhow::Result;

use crate::dataset::{self, SAMPLE_ROW_INDEX};
use crate::llm::TextGenerator;

/// Builds a visualization script for the dataset at `dataset_path`.
///
/// Reads the artifact's column names and one representative row straight
/// from disk for prompt context, so the producing stage must have succeeded
/// first. The returned text is handed to the sandbox unsanitized; the
/// sandbox applies the generic fence-stripping rule itself.
pub async fn generate_script(
    client: &impl TextGenerator,
    dataset_path: &Path,
) -> Result<String> {
    let preview = dataset::read_preview(dataset_path, SAMPLE_ROW_INDEX)?;

    let prompt = format!(
        r#"You are a data visualization agent. Your job is to generate a complete Python script that:

1) Loads the CSV dataset from the path: "{path}"
2) Creates a folder called "visualizations_<current_date_time>". The current date time part is dynamic; determine it at run time.
3) Generates meaningful plots for all columns (e.g., histograms, scatterplots, boxplots, correlations where appropriate)
4) Saves each plot as a PNG in that folder, with clear, descriptive filenames
5) Uses libraries like pandas, matplotlib, seaborn
6) Keeps the code clean, modular, and executable

Information:
1) Dataset columns: {columns}
2) A row from the dataset for reference:
{sample}

Output only the Python code without code fences or extra commentary.
"#,
        path = dataset_path.display(),
        columns = preview.columns.join(", "),
        sample = preview.sample_lines(),
    );

    client.generate(&prompt).await
}
