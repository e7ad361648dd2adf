use mrp_core::enums::{Confidence, MetricCategory, SourceType};
use mrp_db::repos::source::{NewSource, SourceFilter};
use mrp_db::updates::source::SourceUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SourceCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_lines)]
pub async fn handle(
    action: SourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SourceCommands::Add {
            run_id,
            title,
            source_type,
            step,
            confidence,
            url,
            citation,
            metric,
            publisher,
            year,
            geography,
            key_figures,
            usage_notes,
            methodology,
            limitations,
            date_accessed,
        } => {
            let mut input = NewSource::new(run_id, title, parse_enum(&source_type, "type")?);
            input.research_step_id = step;
            input.confidence = confidence
                .as_deref()
                .map(|raw| parse_enum::<Confidence>(raw, "confidence"))
                .transpose()?;
            input.metric_category = metric
                .as_deref()
                .map(|raw| parse_enum::<MetricCategory>(raw, "metric category"))
                .transpose()?;
            input.date_accessed = date_accessed
                .as_deref()
                .map(|raw| parse_date(raw, "date accessed"))
                .transpose()?;
            input.url = url;
            input.citation = citation;
            input.publisher = publisher;
            input.year = year;
            input.geography = match geography {
                Some(g) => Some(g),
                None if !ctx.config.general.default_geography.is_empty() => {
                    Some(ctx.config.general.default_geography.clone())
                }
                None => None,
            };
            input.key_figures = key_figures;
            input.usage_notes = usage_notes;
            input.methodology = methodology;
            input.limitations = limitations;

            let source = ctx.service.create_source(input).await?;
            output(&source, flags.format)
        }
        SourceCommands::Get { id } => {
            let source = ctx.service.get_source(&id).await?;
            output(&source, flags.format)
        }
        SourceCommands::Update {
            id,
            title,
            source_type,
            step,
            unlink_step,
            confidence,
            url,
            citation,
            metric,
            publisher,
            year,
            geography,
            key_figures,
            usage_notes,
            methodology,
            limitations,
            date_accessed,
        } => {
            let mut builder = SourceUpdateBuilder::new();
            let mut any = false;
            if let Some(title) = title {
                builder = builder.title(title);
                any = true;
            }
            if let Some(raw) = source_type.as_deref() {
                builder = builder.source_type(parse_enum(raw, "type")?);
                any = true;
            }
            if let Some(step) = step {
                builder = builder.research_step_id(Some(step));
                any = true;
            } else if unlink_step {
                builder = builder.research_step_id(None);
                any = true;
            }
            if let Some(raw) = confidence.as_deref() {
                builder = builder.confidence(parse_enum(raw, "confidence")?);
                any = true;
            }
            if let Some(raw) = metric.as_deref() {
                builder =
                    builder.metric_category(Some(parse_enum::<MetricCategory>(raw, "metric category")?));
                any = true;
            }
            if let Some(raw) = date_accessed.as_deref() {
                builder = builder.date_accessed(Some(parse_date(raw, "date accessed")?));
                any = true;
            }
            if let Some(url) = url {
                builder = builder.url(Some(url));
                any = true;
            }
            if let Some(citation) = citation {
                builder = builder.citation(Some(citation));
                any = true;
            }
            if let Some(publisher) = publisher {
                builder = builder.publisher(Some(publisher));
                any = true;
            }
            if let Some(year) = year {
                builder = builder.year(Some(year));
                any = true;
            }
            if let Some(geography) = geography {
                builder = builder.geography(Some(geography));
                any = true;
            }
            if let Some(key_figures) = key_figures {
                builder = builder.key_figures(Some(key_figures));
                any = true;
            }
            if let Some(usage_notes) = usage_notes {
                builder = builder.usage_notes(Some(usage_notes));
                any = true;
            }
            if let Some(methodology) = methodology {
                builder = builder.methodology(Some(methodology));
                any = true;
            }
            if let Some(limitations) = limitations {
                builder = builder.limitations(Some(limitations));
                any = true;
            }
            if !any {
                anyhow::bail!("At least one field flag must be provided");
            }

            let source = ctx.service.update_source(&id, builder.build()).await?;
            output(&source, flags.format)
        }
        SourceCommands::Delete { id } => {
            ctx.service.delete_source(&id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        SourceCommands::List {
            run_id,
            step,
            confidence,
            source_type,
        } => {
            let filter = SourceFilter {
                research_step_id: step,
                confidence: confidence
                    .as_deref()
                    .map(|raw| parse_enum::<Confidence>(raw, "confidence"))
                    .transpose()?,
                source_type: source_type
                    .as_deref()
                    .map(|raw| parse_enum::<SourceType>(raw, "type"))
                    .transpose()?,
            };
            let sources = ctx.service.list_sources(&run_id, &filter).await?;
            output(&sources, flags.format)
        }
    }
}
