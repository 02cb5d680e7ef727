//! Package fixtures shaped like the API's shipping-package responses.

use serde_json::{Value as JsonValue, json};

use plentykit_core::{ItemId, OrderItemId, PackageId, PackageRecordId, PalletId, VariationId};

use crate::package::{ContentLine, ItemDescriptor, PackageMetadata, PackageRecord};

pub(crate) fn line(package_id: i64, item_id: i64, variation_id: i64, quantity: i64) -> ContentLine {
    ContentLine {
        id: None,
        package_id: PackageId::new(package_id),
        item_id: ItemId::new(item_id),
        item_quantity: quantity,
        descriptor: ItemDescriptor {
            attribute_values: json!(""),
            batch: json!(""),
            best_before_date: json!(""),
            item_name: json!(format!("item_{item_id}")),
            item_net_weight: json!("0"),
            item_weight: json!("220"),
            order_item_id: None,
            order_item_name: json!(""),
            serial_number: JsonValue::Null,
            variation_id: VariationId::new(variation_id),
            variation_number: json!(format!("sku_{variation_id}")),
        },
    }
}

pub(crate) fn package(
    id: i64,
    pallet_id: i64,
    no_of_package: i64,
    content: Vec<ContentLine>,
) -> PackageRecord {
    PackageRecord {
        id: PackageRecordId::new(id),
        pallet_id: PalletId::new(pallet_id),
        no_of_package,
        order_id: Some(12345),
        metadata: PackageMetadata {
            created_at: json!("1999-01-01 18:00:00"),
            is_closed: json!(false),
            no_of_packages_in_pallet: json!(format!("{no_of_package} of ?")),
            package_id: json!(3),
            package_type: json!(0),
            updated_at: json!("1999-01-01 18:00:00"),
            volume: json!(0),
            weight: json!(325),
            ..PackageMetadata::default()
        },
        content,
    }
}

/// Descriptors of the `n`th test product (`test_product_{n}`, `test_sku_{n}`).
fn described(mut content: ContentLine, attribute: &str, n: u8, order_item: i64) -> ContentLine {
    content.descriptor.attribute_values = json!(attribute);
    content.descriptor.item_name = json!(format!("test_product_{n}"));
    content.descriptor.order_item_id = Some(OrderItemId::new(order_item));
    content.descriptor.order_item_name = json!("test_product");
    content.descriptor.variation_number = json!(format!("test_sku_{n}"));
    content
}

pub(crate) fn single_package() -> Vec<PackageRecord> {
    vec![package(
        12345,
        12345,
        1,
        vec![described(line(23826, 1234, 1234, 1), "Orange", 1, 23456)],
    )]
}

/// Two pallets; variation 1235 spans both, package 23827 holds two variations.
pub(crate) fn three_packages() -> Vec<PackageRecord> {
    vec![
        package(
            23826,
            12345,
            1,
            vec![described(line(23826, 1234, 1234, 1), "Orange", 1, 23456)],
        ),
        package(
            23827,
            12345,
            2,
            vec![
                described(line(23827, 1234, 1234, 1), "Orange", 1, 23456),
                described(line(23827, 1234, 1235, 2), "Blue", 2, 23457),
            ],
        ),
        package(
            23828,
            12346,
            1,
            vec![
                described(line(23828, 1234, 1236, 3), "Red", 3, 23458),
                described(line(23828, 1234, 1235, 4), "Blue", 2, 23457),
            ],
        ),
    ]
}
