use liquor_hub_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiquorHubError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("No hay clave de API configurada. Usa `liquor-hub config --set-api-key TU_CLAVE` o la variable GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("No se encontró la base de datos: {0}")]
    CatalogNotFound(String),

    #[error("Error al procesar el archivo Excel: {0}")]
    CatalogParse(String),

    #[error("Referencia no encontrada: {0}")]
    ProductNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error al cargar la imagen: {0}")]
    ImageLoad(String),

    #[error("Error al llamar a la API: {0}")]
    ApiCall(String),

    #[error("Respuesta de la API no válida: {0}")]
    ApiParse(String),

    #[error("No se pudo generar una nueva imagen. Intenta con un prompt diferente.")]
    NoImageGenerated,

    #[error("Escribe una instrucción para editar la imagen.")]
    EmptyPrompt,

    #[error("Error de red: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de entrada interactiva: {0}")]
    Interactive(String),

    #[error(transparent)]
    Common(#[from] liquor_hub_common::Error),
}

pub type Result<T> = std::result::Result<T, LiquorHubError>;
