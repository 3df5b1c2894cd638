// ============================================================================
// HOME - landing pública de la tienda
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StoreNav;
use crate::routes::Route;

struct FeaturedCategory {
    name: &'static str,
    icon: &'static str,
}

const FEATURED_CATEGORIES: [FeaturedCategory; 4] = [
    FeaturedCategory { name: "Electronics", icon: "💻" },
    FeaturedCategory { name: "Clothing", icon: "👕" },
    FeaturedCategory { name: "Home & Garden", icon: "🪴" },
    FeaturedCategory { name: "Sports", icon: "⚽" },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home-page">
            <StoreNav />
            <section class="hero">
                <h1>{"Welcome to our store"}</h1>
                <p>{"Discover quality products at the best prices."}</p>
                <Link<Route> to={Route::Products} classes="cta-button">
                    {"Shop Now"}
                </Link<Route>>
            </section>
            <section class="featured-categories">
                <h2>{"Featured Categories"}</h2>
                <div class="category-grid">
                    {
                        FEATURED_CATEGORIES.iter().map(|category| html! {
                            <div class="category-card">
                                <span class="category-icon">{category.icon}</span>
                                <span class="category-name">{category.name}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <section class="promo-banner">
                <h2>{"Seasonal deals"}</h2>
                <p>{"Discounted prices are applied automatically at checkout."}</p>
            </section>
        </div>
    }
}
