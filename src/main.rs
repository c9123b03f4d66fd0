use std::env;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use dotenvy::dotenv;
use storefront_cart::{open_cart, Product, StorefrontCart};

const SESSION_VAR: &str = "SESSION_PROFILE";

fn usage() -> ! {
    eprintln!(
        "usage: storefront_cart <command>\n\
         \n\
         commands:\n\
           list                              show cart contents (default)\n\
           add <id> <name> <price> [qty]     add a product to the cart\n\
           remove <id>                       remove a line\n\
           set <id> <qty>                    set a line's quantity\n\
           decrement <id>                    reduce a line's quantity by one\n\
           clear                             empty the cart\n\
           checkout                          submit the cart as an order"
    );
    std::process::exit(2);
}

fn print_cart(cart: &StorefrontCart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{:>4} x {:<30} {:>10}  (id {})",
            line.quantity,
            line.name,
            line.line_total(),
            line.product_id
        );
    }
    println!("Subtotal: {}", cart.subtotal());
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let api_url = env::var("ORDER_API_URL").expect("ORDER_API_URL must be set");
    let cart_path = env::var("CART_PATH").unwrap_or_else(|_| "cart.json".to_string());

    let mut cart =
        open_cart(&cart_path, &api_url, SESSION_VAR).expect("Failed to build the order client");

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["list"] => print_cart(&cart),
        ["add", id, name, price] => {
            add(&mut cart, id, name, price, 1);
        }
        ["add", id, name, price, qty] => {
            let quantity: u32 = qty.parse().expect("quantity must be a positive integer");
            add(&mut cart, id, name, price, quantity);
        }
        ["remove", id] => {
            cart.remove_item(id);
            print_cart(&cart);
        }
        ["set", id, qty] => {
            let quantity: u32 = qty.parse().expect("quantity must be a non-negative integer");
            cart.set_quantity(id, quantity);
            print_cart(&cart);
        }
        ["decrement", id] => {
            cart.decrement_quantity(id);
            print_cart(&cart);
        }
        ["clear"] => {
            cart.clear();
            println!("Cart cleared");
        }
        ["checkout"] => match cart.checkout().await {
            Ok(confirmation) => match confirmation.order_id {
                Some(id) => println!("Order placed: {}", id),
                None => println!("Order placed: {}", confirmation.raw),
            },
            Err(e) => {
                log::error!("Checkout failed: {}", e);
                std::process::exit(1);
            }
        },
        _ => usage(),
    }
}

fn add(cart: &mut StorefrontCart, id: &str, name: &str, price: &str, quantity: u32) {
    let price = BigDecimal::from_str(price).expect("price must be a decimal, e.g. 9.99");
    let product = Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: format!("/images/{}.png", id),
    };
    cart.add_item(&product, quantity);
    print_cart(cart);
}
