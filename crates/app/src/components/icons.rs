use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdLayoutDashboard, LdPackage, LdPackagePlus, LdScrollText, LdSettings, LdShield,
    LdShoppingCart, LdTruck, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;

/// Resolve a registry icon key to a rendered glyph. Unknown keys render
/// nothing rather than failing the whole sidebar.
pub fn nav_icon(key: &str) -> Element {
    match key {
        "layout-dashboard" => {
            rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } }
        }
        "shield" => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        "file-text" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        "package" => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        "package-plus" => {
            rsx! { Icon::<LdPackagePlus> { icon: LdPackagePlus, width: 18, height: 18 } }
        }
        "shopping-cart" => {
            rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 } }
        }
        "truck" => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        "user-plus" => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 } },
        "scroll-text" => {
            rsx! { Icon::<LdScrollText> { icon: LdScrollText, width: 18, height: 18 } }
        }
        _ => rsx! {},
    }
}
