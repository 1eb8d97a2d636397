use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSelection {
    pub menu_item_id: String,
    pub quantity: u32,
}

impl CartSelection {
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        vec![
            (String::from("menu_item_id"), self.menu_item_id.clone()),
            (String::from("quantity"), self.quantity.to_string()),
        ]
    }
}
