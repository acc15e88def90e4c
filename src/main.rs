use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use liquor_hub::{catalog, cli, config, error, form, image_editor, interactive};
use liquor_hub_common::{calculate, classify, extract_capacity_ml, Catalog};
use cli::{Cli, Commands};
use config::Config;
use error::{LiquorHubError, Result};
use form::CalculatorForm;
use image_editor::{EditSession, ImageEditor, SourceImage, PROMPT_SUGGESTIONS};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Calc { product, full_weight, catalog, json } => {
            let catalog = open_catalog(catalog.as_deref(), &config).await?;
            let liquor = catalog
                .resolve(&product)
                .ok_or_else(|| LiquorHubError::ProductNotFound(product.clone()))?;

            let result = calculate(Some(liquor), &full_weight)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("🍸 {}\n", liquor.name);
                println!("{}", form::render_result(&result));
            }
        }

        Commands::List { search, catalog } => {
            let catalog = open_catalog(catalog.as_deref(), &config).await?;
            let liquors = catalog.search(search.as_deref().unwrap_or(""));

            if liquors.is_empty() {
                println!("Sin resultados");
            }
            for liquor in &liquors {
                println!(
                    "{:<12} {:<40} {:>8} g  [{}]",
                    liquor.id,
                    liquor.name,
                    liquor.empty_weight,
                    classify(&liquor.name)
                );
            }
            println!("\n{} de {} referencias", liquors.len(), catalog.len());
        }

        Commands::Classify { name } => {
            let class = classify(&name);
            println!("Tipo: {}", class);
            println!("Unidad: {}", class.unit());
            match extract_capacity_ml(&name) {
                Some(ml) => println!("Capacidad: {} ml", ml),
                None => println!("Capacidad: no detectada"),
            }
        }

        Commands::Form { catalog } => {
            println!("🍸 LiquorHub - Calculadora de inventario\n");

            let mut form = match catalog {
                Some(path) => CalculatorForm::with_catalog(catalog::load_file(&path)?),
                None => {
                    let mut form = CalculatorForm::new();
                    form.auto_load(&config).await;
                    form
                }
            };
            interactive::run_interactive_form(&mut form)?;
        }

        Commands::EditImage { image, prompt, output, suggestions } => {
            if suggestions {
                println!("Sugerencias:");
                for suggestion in PROMPT_SUGGESTIONS {
                    println!("  - {}", suggestion);
                }
            }

            // --suggestions だけなら候補表示で終わり
            let (Some(image), Some(prompt)) = (image, prompt) else {
                return Ok(());
            };

            let editor = ImageEditor::from_config(&config)?;
            let mut session = EditSession::new();
            session.load_source(SourceImage::from_path(&image)?);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!("Procesando con {}...", editor.model()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = session.apply(&editor, &prompt).await.map(|image| image.cloned());
            spinner.finish_and_clear();

            let edited = outcome?.ok_or(LiquorHubError::EmptyPrompt)?;

            let output = output.unwrap_or_else(|| default_edit_output(&image, edited.extension()));
            edited.save(&output)?;
            println!("✔ Imagen guardada: {}", output.display());
        }

        Commands::Template { output, force } => {
            if output.exists() && !force {
                return Err(LiquorHubError::Config(format!(
                    "{} ya existe (usa --force para sobrescribir)",
                    output.display()
                )));
            }

            let buffer = liquor_hub_common::export::excel_core::generate_template_buffer()?;
            std::fs::write(&output, buffer)?;
            println!("✔ Plantilla creada: {}", output.display());
        }

        Commands::Config { set_api_key, set_catalog_url, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ Clave de API guardada");
            }

            if let Some(url) = set_catalog_url {
                config.set_catalog_url(url)?;
                println!("✔ URL del catálogo guardada");
            }

            if show {
                println!("Configuración:");
                println!("  Modelo de imagen: {}", config.image_model);
                println!("  Catálogo: {:?}", config.catalog_source());
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  Clave de API: {}",
                    if config.get_api_key().is_ok() { "configurada" } else { "no configurada" }
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("liquor_hub={0},liquor_hub_common={0}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// --catalog 指定があればそのファイル、なければ既定カタログ
async fn open_catalog(path: Option<&Path>, config: &Config) -> Result<Catalog> {
    match path {
        Some(path) => catalog::load_file(path),
        None => catalog::load_default(config).await,
    }
}

/// 元画像と同じ場所に「名前-editado-日時.拡張子」で保存
fn default_edit_output(source: &Path, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "liquor-hub".to_string());
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    source.with_file_name(format!("{}-editado-{}.{}", stem, timestamp, extension))
}
