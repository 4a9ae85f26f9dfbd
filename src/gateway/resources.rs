//! Per-collection gateway adapters: resource path, filter parameter, and the
//! entity/create/update triple for every screen of the dashboard.

use crate::domain::gallery::{GalleryImage, NewGalleryImage, UpdateGalleryImage};
use crate::domain::gift_card::{GiftCard, NewGiftCard, UpdateGiftCard};
use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::domain::policy::{BookingPolicy, NewBookingPolicy, UpdateBookingPolicy};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::service::{NewSpaService, SpaService, UpdateSpaService};
use crate::domain::special::{MonthlySpecial, NewMonthlySpecial, UpdateMonthlySpecial};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::gateway::Resource;

pub struct Orders;

impl Resource for Orders {
    type Entity = Order;
    type Create = NewOrder;
    type Update = UpdateOrder;

    const PATH: &'static str = "orders";
    const FILTER_PARAM: Option<&'static str> = Some("status");
}

pub struct Products;

impl Resource for Products {
    type Entity = Product;
    type Create = NewProduct;
    type Update = UpdateProduct;

    const PATH: &'static str = "products";
    const FILTER_PARAM: Option<&'static str> = Some("category");
}

pub struct GiftCards;

impl Resource for GiftCards {
    type Entity = GiftCard;
    type Create = NewGiftCard;
    type Update = UpdateGiftCard;

    const PATH: &'static str = "giftcards";
    const FILTER_PARAM: Option<&'static str> = Some("status");
}

pub struct SpaServices;

impl Resource for SpaServices {
    type Entity = SpaService;
    type Create = NewSpaService;
    type Update = UpdateSpaService;

    const PATH: &'static str = "services";
    const FILTER_PARAM: Option<&'static str> = Some("category");
}

pub struct Users;

impl Resource for Users {
    type Entity = User;
    type Create = NewUser;
    type Update = UpdateUser;

    const PATH: &'static str = "users";
    const FILTER_PARAM: Option<&'static str> = Some("role");
}

pub struct BookingPolicies;

impl Resource for BookingPolicies {
    type Entity = BookingPolicy;
    type Create = NewBookingPolicy;
    type Update = UpdateBookingPolicy;

    const PATH: &'static str = "policies";
    const FILTER_PARAM: Option<&'static str> = None;
}

pub struct MonthlySpecials;

impl Resource for MonthlySpecials {
    type Entity = MonthlySpecial;
    type Create = NewMonthlySpecial;
    type Update = UpdateMonthlySpecial;

    const PATH: &'static str = "specials";
    const FILTER_PARAM: Option<&'static str> = Some("month");
}

pub struct GalleryImages;

impl Resource for GalleryImages {
    type Entity = GalleryImage;
    type Create = NewGalleryImage;
    type Update = UpdateGalleryImage;

    const PATH: &'static str = "gallery";
    const FILTER_PARAM: Option<&'static str> = None;
}
