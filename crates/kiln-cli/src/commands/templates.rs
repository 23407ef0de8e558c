//! Implementation of the `kiln templates` command.

use kiln_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new();
    let templates = service.list(args.framework.map(Into::into));

    // The global `--output-format json` wins over the table default.
    let format = if output.is_machine_readable() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => print_table(&templates, output)?,
        ListFormat::Json => output.json(&templates)?,
        ListFormat::List => {
            for t in &templates {
                output.data(&t.id)?;
            }
        }
        ListFormat::Csv => output.data(&to_csv(&templates))?,
    }

    Ok(())
}

fn print_table(templates: &[TemplateInfo], output: &OutputManager) -> CliResult<()> {
    if templates.is_empty() {
        output.warning("No templates match that filter")?;
        return Ok(());
    }

    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);

    output.header("Available Templates:")?;
    for t in templates {
        let star = if t.popular { "*" } else { " " };
        output.print(&format!(
            "  {star} {:<width$}  {:<8} {:<3} {:<9} {:<5} {}",
            t.id, t.framework, t.language, t.styling, t.package_manager, t.description
        ))?;
    }
    output.print("")?;
    output.info("Use one with: kiln new <NAME> --template <ID>")?;
    Ok(())
}

fn to_csv(templates: &[TemplateInfo]) -> String {
    let mut out =
        String::from("id,name,framework,language,styling,packageManager,tooling,popular\n");
    for t in templates {
        let row = [
            csv_field(&t.id),
            csv_field(&t.name),
            csv_field(&t.framework),
            csv_field(&t.language),
            csv_field(&t.styling),
            csv_field(&t.package_manager),
            csv_field(&t.tooling.join(" ")),
            t.popular.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a separator, a quote or a newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
