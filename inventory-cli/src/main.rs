mod api;

use anyhow::{bail, Result};
use colored::*;
use serde_json::{json, Map, Value};
use std::io::{self, Write};

use api::{Car, CarsApi};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let run_smoke = args.iter().any(|a| a == "smoke");
    let base_url = args
        .iter()
        .find(|a| a.starts_with("http"))
        .cloned()
        .or_else(|| std::env::var("INVENTORY_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let api = CarsApi::new(&base_url);

    println!("{}", "🚗 Car Inventory Client".bright_blue().bold());
    println!("{}", format!("API: {}", api.base_url()).bright_blue());

    if run_smoke {
        return smoke(&api).await;
    }

    loop {
        println!();
        println!("{}", "📋 MAIN MENU".bright_green().bold());
        println!("{}", "============".bright_green());
        println!("1. List cars");
        println!("2. Show a car");
        println!("3. Add a car");
        println!("4. Edit a car");
        println!("5. Delete a car");
        println!("6. Run smoke scenario");
        println!("7. Exit");

        let choice = prompt("Choose an option (1-7): ")?;
        let result = match choice.as_str() {
            "1" => list_cars(&api).await,
            "2" => show_car(&api).await,
            "3" => add_car(&api).await,
            "4" => edit_car(&api).await,
            "5" => delete_car(&api).await,
            "6" => smoke(&api).await,
            "7" => {
                println!("{}", "👋 Bye!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Invalid option, try again.".bright_red());
                continue;
            }
        };

        if let Err(e) = result {
            println!("{}", format!("❌ {}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_car(car: &Car) {
    println!(
        "{} {} [{}] {} - stock {}",
        format!("#{}", car.id).bright_cyan(),
        car.name.bold(),
        car.category,
        car.price,
        car.stock
    );
    if !car.description.is_empty() {
        println!("    {}", car.description.dimmed());
    }
}

async fn list_cars(api: &CarsApi) -> Result<()> {
    let cars = api.get_cars().await?;
    println!("{}", format!("📦 {} cars", cars.len()).bright_green().bold());
    for car in &cars {
        print_car(car);
    }
    Ok(())
}

async fn show_car(api: &CarsApi) -> Result<()> {
    let id = prompt("Car id: ")?;
    let car = api.get_car(&id).await?;
    print_car(&car);
    Ok(())
}

async fn add_car(api: &CarsApi) -> Result<()> {
    let mut body = Map::new();
    for field in ["name", "category", "description", "price", "stock"] {
        let value = prompt(&format!("{}: ", field))?;
        if !value.is_empty() {
            body.insert(field.to_string(), field_value(field, value));
        }
    }

    let car = api.create_car(&Value::Object(body)).await?;
    println!("{}", "✅ Car created".bright_green());
    print_car(&car);
    Ok(())
}

async fn edit_car(api: &CarsApi) -> Result<()> {
    let id = prompt("Car id: ")?;
    println!("{}", "Leave a field empty to keep its value.".dimmed());

    let mut changes = Map::new();
    for field in ["name", "category", "description", "price", "stock"] {
        let value = prompt(&format!("{}: ", field))?;
        if !value.is_empty() {
            changes.insert(field.to_string(), field_value(field, value));
        }
    }

    let car = api.update_car(&id, &Value::Object(changes)).await?;
    println!("{}", "✅ Car updated".bright_green());
    print_car(&car);
    Ok(())
}

async fn delete_car(api: &CarsApi) -> Result<()> {
    let id = prompt("Car id: ")?;
    let confirm = prompt(&format!("Delete car {}? (y/N): ", id))?;
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return Ok(());
    }

    api.delete_car(&id).await?;
    println!("{}", "✅ Car deleted".bright_green());
    Ok(())
}

/// Numbers typed at the prompt go over the wire as JSON numbers when they parse.
fn field_value(field: &str, value: String) -> Value {
    match field {
        "price" | "stock" => value.parse::<u64>().map(Value::from).unwrap_or(Value::String(value)),
        _ => Value::String(value),
    }
}

fn step(label: &str, ok: bool) {
    if ok {
        println!("{} {}", "✅".green(), label);
    } else {
        println!("{} {}", "❌".red(), label.bright_red());
    }
}

/// Create, read, update and delete one car, checking every response.
async fn smoke(api: &CarsApi) -> Result<()> {
    println!();
    println!("{}", "🧪 SMOKE SCENARIO".bright_cyan().bold());
    println!("{}", "=================".bright_cyan());

    let before = api.get_cars().await?.len();
    step(&format!("list cars ({} found)", before), true);

    let created = api
        .create_car(&json!({ "name": "Toyota Camry", "category": "Sedan", "price": 2500000 }))
        .await?;
    let defaults_ok = created.description.is_empty() && created.stock == 0;
    step(&format!("create car #{}", created.id), defaults_ok);

    let fetched = api.get_car(&created.id).await?;
    step("fetch created car", fetched == created);

    let updated = api.update_car(&created.id, &json!({ "stock": 5 })).await?;
    let update_ok = updated.stock == 5 && Car { stock: 0, ..updated.clone() } == created;
    step("update stock to 5", update_ok);

    api.delete_car(&created.id).await?;
    step("delete car", true);

    let gone = api.get_car(&created.id).await.is_err();
    step("deleted car is gone", gone);

    let after = api.get_cars().await?.len();
    step("list size restored", after == before);

    if defaults_ok && fetched == created && update_ok && gone && after == before {
        println!("{}", "🎉 All steps passed".bright_green().bold());
        Ok(())
    } else {
        bail!("smoke scenario failed")
    }
}
