//! Parties: the people and companies the inventory deals with.
//!
//! Sellers, buyers and vendors carry contact details only. Vendors are the
//! dependency target of products.

pub mod party;

pub use party::{Buyer, BuyerId, NewBuyer, NewSeller, NewVendor, Seller, SellerId, Vendor, VendorId};
