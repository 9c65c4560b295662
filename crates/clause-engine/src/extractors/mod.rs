pub mod numeric;
pub mod payment_terms;
