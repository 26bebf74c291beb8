use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "lista-super-cli")]
#[command(about = "Command-line client for the grocery catalog service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category
    Categories,
    /// Show one category
    Category { id: String },
    /// Create a category
    CreateCategory { nombre: String },
    /// Rename a category
    RenameCategory { id: String, nombre: String },
    /// Delete a category with no products (the name is required by the API)
    DeleteCategory { id: String, nombre: String },
    /// Create a product
    CreateProduct {
        nombre: String,
        categoria_id: i64,
        #[arg(short, long)]
        descripcion: Option<String>,
    },
}

impl Commands {
    fn request(self) -> (Method, String, Option<Value>) {
        match self {
            Commands::Categories => (Method::GET, "/categoria".into(), None),
            Commands::Category { id } => (Method::GET, format!("/categoria/{id}"), None),
            Commands::CreateCategory { nombre } => {
                (Method::POST, "/categoria".into(), Some(json!({ "nombre": nombre })))
            }
            Commands::RenameCategory { id, nombre } => (
                Method::PUT,
                format!("/categoria/{id}"),
                Some(json!({ "nombre": nombre })),
            ),
            Commands::DeleteCategory { id, nombre } => (
                Method::DELETE,
                format!("/categoria/{id}"),
                Some(json!({ "nombre": nombre })),
            ),
            Commands::CreateProduct { nombre, categoria_id, descripcion } => {
                let mut body = json!({ "nombre": nombre, "categoria_id": categoria_id });
                if let Some(d) = descripcion {
                    body["descripcion"] = Value::String(d);
                }
                (Method::POST, "/producto".into(), Some(body))
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, path, body) = cli.command.request();
    let mut req = client.request(method, format!("{}{}", cli.url.trim_end_matches('/'), path));
    if let Some(body) = body {
        req = req.json(&body);
    }

    print_response(req.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        let message = json.get("Error").and_then(Value::as_str).unwrap_or("unknown error");
        eprintln!("Error ({}): {}", status, message);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
