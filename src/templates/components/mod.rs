pub mod thing_card;

pub use thing_card::thing_card;
