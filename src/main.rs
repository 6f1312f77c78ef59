use inventario::telemetry::setup_tracing;
use inventario::{
    spawn_inventory, Book, Describe, Electronic, Inventory, InventoryError, Product, ProductInfo,
    ServiceConfig,
};
use tracing::{error, info, info_span, Instrument};

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("Starting inventory demo");

    let mut inventory = Inventory::new();

    report(info_span!("stock_demo").in_scope(|| stock_demo(&mut inventory)));
    report(info_span!("duplicate_demo").in_scope(|| duplicate_demo(&mut inventory)));
    report(info_span!("validation_demo").in_scope(|| validation_demo(&mut inventory)));

    let service_result = service_demo(ServiceConfig::from_env())
        .instrument(info_span!("service_demo"))
        .await;
    report(service_result);

    info!("Inventory demo completed");
}

/// Every demo sequence stops at its first error; the error is shown here and
/// the next sequence runs.
fn report(result: Result<(), InventoryError>) {
    if let Err(e) = result {
        error!(error = %e, "Operation sequence aborted");
        println!("Error: {e}");
    }
}

fn print_listing(title: &str, lines: &[String]) {
    println!("--- {title} ---");
    for line in lines {
        println!("{line}");
    }
}

fn stock_demo(inventory: &mut Inventory) -> Result<(), InventoryError> {
    let laptop = Electronic::new(1, "Laptop HP", 899.99, 5, "HP", "110V")?;
    let chair = ProductInfo::new(2, "Silla de oficina", 149.50, 10)?;
    let novel = Book::new(
        3,
        "Cien años de soledad",
        29.99,
        15,
        "Gabriel García Márquez",
        496,
    )?;

    println!("{}", inventory.add(laptop)?);
    println!("{}", inventory.add(chair)?);
    println!("{}", inventory.add(novel)?);

    print_listing("Inventario", &inventory.list());

    for id in [1, 3, 99] {
        match inventory.find_by_id(id) {
            Some(Product::Electronic(electronic)) => {
                println!("Encontrado: {}", electronic.describe());
                println!("{}", electronic.warranty_statement());
            }
            Some(Product::Book(book)) => {
                println!("Encontrado: {}", book.describe());
                println!("{}", book.reading_recommendation());
            }
            Some(product) => println!("Encontrado: {}", product.describe()),
            None => println!("Producto con ID {id} no encontrado."),
        }
    }

    for id in [2, 2] {
        if inventory.remove_by_id(id) {
            println!("Producto con ID {id} eliminado.");
        } else {
            println!("No existe un producto con ID {id}.");
        }
    }

    print_listing("Inventario actualizado", &inventory.list());
    println!(
        "Valor total del inventario: ${:.2}",
        inventory.total_value()
    );

    Ok(())
}

fn duplicate_demo(inventory: &mut Inventory) -> Result<(), InventoryError> {
    let clone = Electronic::new(1, "Laptop Dell", 749.00, 2, "Dell", "220V")?;
    inventory.add(clone)?;
    println!("Este mensaje no se muestra: el ID 1 ya existe.");
    Ok(())
}

fn validation_demo(inventory: &mut Inventory) -> Result<(), InventoryError> {
    let broken = Book::new(4, "Libro defectuoso", -10.0, 1, "Nadie", 100)?;
    inventory.add(broken)?;
    println!("Este mensaje no se muestra: el precio es negativo.");
    Ok(())
}

async fn service_demo(config: ServiceConfig) -> Result<(), InventoryError> {
    info!(buffer_size = config.buffer_size, "Starting inventory service");
    let (client, handle) = spawn_inventory(config);

    client
        .add_product(Electronic::new(10, "Monitor LG", 199.90, 4, "LG", "220V")?.into())
        .await?;
    client
        .add_product(Book::new(11, "Rayuela", 18.50, 6, "Julio Cortázar", 600)?.into())
        .await?;

    print_listing("Inventario compartido", &client.list_products().await?);
    println!(
        "Valor total del inventario compartido: ${:.2}",
        client.total_value().await?
    );

    client.shutdown().await?;
    if let Err(e) = handle.await {
        error!(error = %e, "Inventory service task failed");
    }
    Ok(())
}
