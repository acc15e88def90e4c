//! 対話式計算フォーム
//!
//! 検索 → 商品選択 → 満重量入力 → 計算、をターミナルで繰り返す。
//! 状態はすべて `CalculatorForm` が持ち、ここは入出力だけを行う。

use crate::error::{LiquorHubError, Result};
use crate::form::{info_banner, render_result, CalculatorForm, LoadStatus};
use dialoguer::{Input, Select};
use std::path::Path;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// 検索語を入力
    Search,
    /// 商品を選択
    Select,
    /// 満重量を入力して計算
    Weigh,
    /// Excelを読み込み直す
    Upload,
    /// 終了
    Quit,
}

impl FormAction {
    fn label(&self, form: &CalculatorForm) -> String {
        match self {
            FormAction::Search => match form.search_term() {
                "" => "Buscar (Ron, Vino, Barril...)".to_string(),
                term => format!("Buscar (actual: {})", term),
            },
            FormAction::Select => format!("Seleccionar licor ({} resultados)", form.filtered().len()),
            FormAction::Weigh => form.action_label(),
            FormAction::Upload => match form.status() {
                LoadStatus::Ready => "Actualizar base de datos Excel".to_string(),
                _ => "Cargar Excel".to_string(),
            },
            FormAction::Quit => "Salir".to_string(),
        }
    }
}

/// 現在の状態で選べるアクション
pub fn available_actions(form: &CalculatorForm) -> Vec<FormAction> {
    if form.catalog().is_empty() {
        return vec![FormAction::Upload, FormAction::Quit];
    }

    let mut actions = vec![FormAction::Search, FormAction::Select];
    if form.selected().is_some() {
        actions.push(FormAction::Weigh);
    }
    actions.push(FormAction::Upload);
    actions.push(FormAction::Quit);
    actions
}

/// アクションと表示名
fn menu(form: &CalculatorForm) -> (Vec<FormAction>, Vec<String>) {
    let actions = available_actions(form);
    let labels = actions.iter().map(|a| a.label(form)).collect();
    (actions, labels)
}

fn interaction_error(e: dialoguer::Error) -> LiquorHubError {
    LiquorHubError::Interactive(e.to_string())
}

/// 対話式フォームを実行
pub fn run_interactive_form(form: &mut CalculatorForm) -> Result<()> {
    if form.status() == LoadStatus::NeedsUpload {
        println!("⚠ Base de datos no detectada");
        println!("  No se encontró el archivo LICORES.xlsx automáticamente. Cárgalo manualmente para continuar.\n");
    } else {
        println!("✔ {} referencias cargadas\n", form.catalog().len());
    }
    println!("{}\n", info_banner());

    loop {
        if let Some(selected) = form.selected() {
            println!("Licor seleccionado: {} (vacío: {} g)", selected.name, selected.empty_weight);
        }

        let (actions, labels) = menu(form);

        let choice = Select::new()
            .with_prompt("¿Qué quieres hacer?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(interaction_error)?;

        let Some(index) = choice else {
            break;
        };

        match actions[index] {
            FormAction::Search => {
                let term: String = Input::new()
                    .with_prompt("Buscar")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(interaction_error)?;
                form.set_search(term.trim());
            }
            FormAction::Select => prompt_select(form)?,
            FormAction::Weigh => {
                let weight: String = Input::new()
                    .with_prompt("Peso Lleno (gramos)")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(interaction_error)?;
                form.set_full_weight(weight);

                match form.calculate() {
                    Ok(result) => println!("\n{}\n", render_result(result)),
                    Err(message) => println!("\n⚠ {}\n", message),
                }
            }
            FormAction::Upload => {
                let path: String = Input::new()
                    .with_prompt("Ruta del archivo Excel (.xlsx, .xls)")
                    .interact_text()
                    .map_err(interaction_error)?;
                prompt_upload(form, Path::new(path.trim()));
            }
            FormAction::Quit => break,
        }
    }

    Ok(())
}

fn prompt_select(form: &mut CalculatorForm) -> Result<()> {
    let options: Vec<(String, String)> = form
        .filtered()
        .iter()
        .map(|l| (l.id.clone(), l.name.clone()))
        .collect();

    if options.is_empty() {
        println!("  → Sin resultados para \"{}\"\n", form.search_term());
        return Ok(());
    }

    let names: Vec<&str> = options.iter().map(|(_, name)| name.as_str()).collect();
    let choice = Select::new()
        .with_prompt("Seleccione una referencia")
        .items(&names)
        .default(0)
        .max_length(15)
        .interact_opt()
        .map_err(interaction_error)?;

    if let Some(index) = choice {
        form.select(options[index].0.clone());
    }
    Ok(())
}

fn prompt_upload(form: &mut CalculatorForm, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("  → No se pudo leer {}: {}\n", path.display(), e);
            return;
        }
    };

    match form.upload(&bytes) {
        Ok(()) => println!("  ✔ {} referencias cargadas\n", form.catalog().len()),
        Err(_) => println!("  ⚠ {}\n", form.error().unwrap_or_default()),
    }
}
