pub mod errors;
pub mod db;
pub mod producto;
pub mod categoria;
pub mod categoria_producto;

#[cfg(test)]
mod tests;
