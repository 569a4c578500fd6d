//! Seed data and specification rows for the storefront catalog.

use crate::models::{Category, Product, Specification};

pub const SEED_DESCRIPTION: &str = "این کالا از کلکسیون ویژه امیرلوکس انتخاب شده و دارای تاییدیه اصالت و سلامت فیزیکی می‌باشد.";
pub const SEED_RATING: f64 = 4.8;
pub const NEW_PRODUCT_RATING: f64 = 5.0;
pub const GOLD_KARAT: &str = "18 عیار";

struct Template {
    title: &'static str,
    price: i64,
    category: Category,
    weight: Option<f64>,
}

const TEMPLATES: [Template; 9] = [
    Template {
        title: "گردنبند طلا 18 عیار زنانه طرح قلب کد G120",
        price: 12_450_000,
        category: Category::Gold,
        weight: Some(2.4),
    },
    Template {
        title: "دستبند طلا 18 عیار مدل ون کلیف صدف",
        price: 18_900_000,
        category: Category::Gold,
        weight: Some(3.8),
    },
    Template {
        title: "انگشتر طلا 18 عیار مدل کارتیه گره‌ای",
        price: 9_800_000,
        category: Category::Gold,
        weight: Some(1.9),
    },
    Template {
        title: "گوشواره طلا 18 عیار مدل بخیه‌ای طرح گل",
        price: 5_600_000,
        category: Category::Gold,
        weight: Some(1.1),
    },
    Template {
        title: "کرم پودر لورآل مدل Infallible شماره 120",
        price: 850_000,
        category: Category::Cosmetics,
        weight: None,
    },
    Template {
        title: "ریمل حجم دهنده اسنس مدل I Love Extreme Crazy Volume",
        price: 245_000,
        category: Category::Cosmetics,
        weight: None,
    },
    Template {
        title: "ادو پرفیوم زنانه لالیک مدل Le Amour حجم 100 میلی لیتر",
        price: 2_900_000,
        category: Category::Cosmetics,
        weight: None,
    },
    Template {
        title: "سرم پوست نوتروژینا مدل Hydro Boost حجم 30 میلی لیتر",
        price: 680_000,
        category: Category::Cosmetics,
        weight: None,
    },
    Template {
        title: "رژ لب مایع ویولت مدل Matt شماره 08",
        price: 120_000,
        category: Category::Cosmetics,
        weight: None,
    },
];

const SEED_WAGES_PERCENT: f64 = 5.0;
const SEED_PROFIT_PERCENT: f64 = 7.0;

/// Builds `count` products by cycling the templates; ids are `lux-{index}`.
pub fn seed_catalog(count: usize) -> Vec<Product> {
    TEMPLATES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, t)| {
            let gold = t.category == Category::Gold;
            let (wages, profit) = if gold {
                (Some(SEED_WAGES_PERCENT), Some(SEED_PROFIT_PERCENT))
            } else {
                (None, None)
            };
            let specs = match (gold, t.weight) {
                (true, Some(weight)) => gold_specs(weight, SEED_WAGES_PERCENT, SEED_PROFIT_PERCENT),
                _ => vec![
                    Specification::new("اصالت", "تضمین اصالت کالا"),
                    Specification::new("تامین‌کننده", "امیرلوکس"),
                ],
            };
            Product {
                id: format!("lux-{i}"),
                title: t.title.to_string(),
                price: t.price,
                image: String::new(),
                category: t.category,
                rating: SEED_RATING,
                description: SEED_DESCRIPTION.to_string(),
                specs,
                weight: t.weight,
                wages_percent: wages,
                profit_percent: profit,
            }
        })
        .collect()
}

/// Karat, net weight, wages and profit rows shown on a gold item.
pub fn gold_specs(weight: f64, wages_percent: f64, profit_percent: f64) -> Vec<Specification> {
    vec![
        Specification::new("عیار", GOLD_KARAT),
        Specification::new("وزن خالص", format!("{} گرم", trim_number(weight))),
        Specification::new("اجرت ساخت", format!("{} درصد", trim_number(wages_percent))),
        Specification::new("سود فروشنده", format!("{} درصد", trim_number(profit_percent))),
    ]
}

pub fn authenticity_specs() -> Vec<Specification> {
    vec![Specification::new("اصالت", "تضمین اصالت امیرلوکس")]
}

/// `2.0` renders as `2`, `2.40` as `2.4`.
fn trim_number(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_cycles_templates() {
        let products = seed_catalog(40);
        assert_eq!(products.len(), 40);
        assert_eq!(products[0].id, "lux-0");
        assert_eq!(products[9].title, products[0].title);
        assert_eq!(products.iter().filter(|p| p.is_gold()).count(), 20);
    }

    #[test]
    fn gold_seed_carries_pricing_inputs() {
        let products = seed_catalog(9);
        let ring = &products[2];
        assert_eq!(ring.weight, Some(1.9));
        assert_eq!(ring.wages_percent, Some(5.0));
        assert_eq!(ring.specs[1].value, "1.9 گرم");

        let cosmetic = &products[4];
        assert!(cosmetic.weight.is_none());
        assert!(cosmetic.profit_percent.is_none());
        assert_eq!(cosmetic.specs.len(), 2);
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(trim_number(2.0), "2");
        assert_eq!(trim_number(2.5), "2.5");
    }
}
