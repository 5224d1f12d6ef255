pub(crate) mod prp;
pub(crate) mod sponge;

#[cfg(test)]
mod tests;
