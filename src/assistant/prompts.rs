use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Product;

pub const WELCOME: &str = "سلام! من هوش مصنوعی اختصاصی امیرلوکس هستم. چطور می‌توانم در استعلام قیمت یا انتخاب بهترین کالای بازار به شما کمک کنم؟";

/// Shown when the model answers with no text.
pub const FALLBACK_REPLY: &str = "متاسفم، مشکلی در پاسخگویی پیش آمد.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WriterLanguage {
    #[default]
    En,
    Fa,
}

impl WriterLanguage {
    pub fn instruction(self) -> &'static str {
        match self {
            WriterLanguage::En => {
                "You are a creative writer. Write high-quality English prose or poetry."
            }
            WriterLanguage::Fa => {
                "شما یک نویسنده خلاق هستید. متن‌های ادبی یا اشعار فارسی بسیار با کیفیت بنویسید."
            }
        }
    }
}

/// `title - قیمت: price` per product, joined with ` | `.
pub fn catalog_context(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| format!("{} - قیمت: {}", p.title, p.price))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn shopping_advice(query: &str, products: &[Product]) -> String {
    format!(
        "کاربر می‌پرسد: \"{query}\"\n\
         محصولات ویترین ما: [{context}]\n\n\
         شما دستیار ارشد فروشگاه \"امیرلوکس\" هستید. شما باید با ادب و تخصص بالا راهنمایی کنید. \
         اگر محصول در ویترین نبود، با جستجو در وب قیمت بازار را پیدا کن و بگو امیرلوکس می‌تواند آن را با بهترین شرایط تامین کند.",
        context = catalog_context(products),
    )
}

pub fn product_lookup(query: &str) -> String {
    format!(
        "یک جستجوی کامل برای محصول \"{query}\" در بازار آنلاین ایران انجام بده.\n\
         اطلاعات را به صورت یک شیء JSON استخراج کن که شامل این موارد باشد:\n\
         - title: نام کامل فارسی\n\
         - price: قیمت به عدد (تومان)\n\
         - image: لینک مستقیم عکس با کیفیت\n\
         - category: دسته بندی\n\
         - specs: حداقل 4 ویژگی فنی مهم (آرایه‌ای از رشته‌ها)\n\
         - rating: امتیاز (عدد بین 1 تا 5)\n\n\
         نکته مهم: اصلاً نامی از سایت‌های منبع نبر. شما تامین‌کننده انحصاری امیرلوکس هستید."
    )
}
