use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::utils::{
    broadcast, load_from_storage, remove_from_storage, save_to_storage, CART_UPDATED_EVENT,
    STORAGE_KEY_CART,
};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    // Precio unitario visto al añadir (el descontado del servidor si había)
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Carrito local. Vive en localStorage; los totales mostrados en el checkout
/// final vienen siempre de la respuesta del servidor, no de este cálculo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn load() -> Self {
        load_from_storage(STORAGE_KEY_CART).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = save_to_storage(STORAGE_KEY_CART, self) {
            log::error!("❌ Error guardando carrito: {}", e);
        }
        broadcast(CART_UPDATED_EVENT);
    }

    pub fn clear() {
        remove_from_storage(STORAGE_KEY_CART);
        broadcast(CART_UPDATED_EVENT);
    }

    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.effective_price(),
            quantity: 1,
        });
    }

    /// Ajusta la cantidad; en cero la línea desaparece.
    pub fn change_quantity(&mut self, product_id: i64, delta: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let updated = i64::from(item.quantity) + i64::from(delta);
            if updated <= 0 {
                self.items.retain(|i| i.product_id != product_id);
            } else {
                item.quantity = updated as u32;
            }
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, discounted: Option<f64>) -> Product {
        Product {
            id,
            category_id: None,
            inventory_id: None,
            name: format!("Product {}", id),
            description: None,
            price,
            stock_level: 10,
            discounted_price: discounted,
            image_url: None,
            promotion_id: None,
        }
    }

    #[test]
    fn adding_same_product_merges_lines() {
        let mut cart = Cart::default();
        let p = product(1, 100.0, None);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn cart_uses_discounted_price_from_server() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100.0, Some(80.0)));

        assert_eq!(cart.items[0].unit_price, 80.0);
        assert_eq!(cart.total(), 80.0);
    }

    #[test]
    fn quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(&product(1, 50.0, None));
        cart.change_quantity(1, -1);

        assert!(cart.is_empty());
    }

    // El badge del header muestra exactamente este count tras cada mutación
    #[test]
    fn count_tracks_every_mutation() {
        let mut cart = Cart::default();
        cart.add(&product(1, 10.0, None));
        cart.add(&product(2, 20.0, None));
        assert_eq!(cart.count(), 2);

        cart.change_quantity(1, 2);
        assert_eq!(cart.count(), 4);

        cart.remove(2);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn totals_sum_all_lines() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100.0, None));
        cart.add(&product(2, 150.0, None));
        cart.change_quantity(2, 1);

        assert_eq!(cart.total(), 100.0 + 300.0);
        assert_eq!(cart.count(), 3);
    }
}
