//! Extraction of product records from search and product pages.
//!
//! Every field is looked up on its own. A missing element leaves that field
//! empty and never fails the record; only an unparsable selector is an error.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::scrape::{ScrapeError, ScrapeResult, ScrapedProduct};

const SEARCH_RESULT: &str = r#"div[data-component-type="s-search-result"]"#;
const SEARCH_TITLE: &str = "span.a-size-base-plus.a-color-base.a-text-normal";
const SEARCH_PRICE: &str = "span.a-offscreen";
const SEARCH_RATING: &str = "span.a-icon-alt";
const SEARCH_LINK: &str =
    "a.a-link-normal.s-underline-text.s-underline-link-text.s-link-style.a-text-normal";
const SEARCH_IMAGE: &str = "img.s-image";

const PRODUCT_TITLE: &str = "span#productTitle";
const PRICE_SYMBOL: &str = "span.a-price-symbol";
const PRICE_WHOLE: &str = "span.a-price-whole";
const PRICE_FRACTION: &str = "span.a-price-fraction";
const PRODUCT_RATING: &str = "span#acrPopover";
const PRODUCT_IMAGE: &str = "img#landingImage";

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

fn first<'a>(scope: ElementRef<'a>, css: &str) -> ScrapeResult<Option<ElementRef<'a>>> {
    Ok(scope.select(&selector(css)?).next())
}

fn text(scope: ElementRef<'_>, css: &str) -> ScrapeResult<Option<String>> {
    Ok(first(scope, css)?.map(|el| el.text().collect()))
}

fn attr(scope: ElementRef<'_>, css: &str, name: &str) -> ScrapeResult<Option<String>> {
    Ok(first(scope, css)?.and_then(|el| el.value().attr(name).map(str::to_string)))
}

/// Build the search page url for `query`, e.g. `{base_url}/s?k=gaming+keyboard`.
pub fn search_url(base_url: &str, query: &str) -> ScrapeResult<String> {
    let endpoint = format!("{}/s", base_url.trim_end_matches('/'));
    Ok(Url::parse_with_params(&endpoint, &[("k", query)])?.into())
}

/// The result link used for every product of a search page.
///
/// The link is looked up once on the whole page rather than inside each
/// result block, so all results of one search share the same url. Fixing
/// that only means moving this lookup into [`parse_search_results`]' loop.
pub fn page_level_result_url(document: &Html, base_url: &str) -> ScrapeResult<Option<String>> {
    let href = attr(document.root_element(), SEARCH_LINK, "href")?;
    Ok(href.map(|href| format!("{}{href}", base_url.trim_end_matches('/'))))
}

/// Extract one product per search result block.
pub fn parse_search_results(document: &Html, base_url: &str) -> ScrapeResult<Vec<ScrapedProduct>> {
    let results = selector(SEARCH_RESULT)?;
    let shared_url = page_level_result_url(document, base_url)?;

    document
        .select(&results)
        .map(|block| -> ScrapeResult<ScrapedProduct> {
            Ok(ScrapedProduct {
                title: text(block, SEARCH_TITLE)?.unwrap_or_default(),
                price: text(block, SEARCH_PRICE)?.unwrap_or_default(),
                rating: text(block, SEARCH_RATING)?.unwrap_or_default(),
                url: shared_url.clone().unwrap_or_default(),
                image: attr(block, SEARCH_IMAGE, "src")?.unwrap_or_default(),
            })
        })
        .collect()
}

/// Join the three price fragments of a product page.
///
/// Pages usually nest the decimal point inside the whole part (`19.`); when
/// it is absent a `.` is inserted so `$`, `19`, `99` reads `$19.99`.
fn join_price(symbol: &str, whole: &str, fraction: &str) -> String {
    let whole = whole.trim();
    let separator = if whole.ends_with(|c: char| c == '.' || c == ',') { "" } else { "." };
    format!("{}{whole}{separator}{}", symbol.trim(), fraction.trim())
}

fn product_price(page: ElementRef<'_>) -> ScrapeResult<Option<String>> {
    let symbol = text(page, PRICE_SYMBOL)?;
    let whole = text(page, PRICE_WHOLE)?;
    let fraction = text(page, PRICE_FRACTION)?;

    Ok(match (symbol, whole, fraction) {
        (Some(symbol), Some(whole), Some(fraction)) => Some(join_price(&symbol, &whole, &fraction)),
        _ => None,
    })
}

fn product_rating(page: ElementRef<'_>) -> ScrapeResult<Option<String>> {
    let title = attr(page, PRODUCT_RATING, "title")?;
    Ok(title.and_then(|t| t.split_whitespace().next().map(str::to_string)))
}

/// Extract a product from its own page. `url` is echoed into the record.
pub fn parse_product_page(document: &Html, url: &str) -> ScrapeResult<ScrapedProduct> {
    let page = document.root_element();

    Ok(ScrapedProduct {
        title: text(page, PRODUCT_TITLE)?
            .map(|t| t.trim().to_string())
            .unwrap_or_default(),
        price: product_price(page)?.unwrap_or_default(),
        rating: product_rating(page)?.unwrap_or_default(),
        url: url.to_string(),
        image: attr(page, PRODUCT_IMAGE, "src")?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_URL: &str = "https://www.amazon.com/dp/B098LG3N6R";

    fn product_page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    const FULL_PRODUCT: &str = r#"
        <span id="productTitle">   Widget   </span>
        <span class="a-price">
            <span class="a-price-symbol">$</span><span class="a-price-whole">19</span><span class="a-price-fraction">99</span>
        </span>
        <span id="acrPopover" title="4.5 out of 5 stars"></span>
        <img id="landingImage" src="http://x/img.png">
    "#;

    #[test]
    fn parses_full_product_page() {
        let product = parse_product_page(&product_page(FULL_PRODUCT), PRODUCT_URL).unwrap();

        assert_eq!(
            product,
            ScrapedProduct {
                title: "Widget".to_string(),
                price: "$19.99".to_string(),
                rating: "4.5".to_string(),
                url: PRODUCT_URL.to_string(),
                image: "http://x/img.png".to_string(),
            }
        );
    }

    #[test]
    fn keeps_nested_decimal_point() {
        let page = product_page(
            r#"<span class="a-price-symbol">$</span>
               <span class="a-price-whole">1,299<span class="a-price-decimal">.</span></span>
               <span class="a-price-fraction">00</span>"#,
        );
        let product = parse_product_page(&page, PRODUCT_URL).unwrap();
        assert_eq!(product.price, "$1,299.00");
    }

    #[test]
    fn missing_title_leaves_other_fields_intact() {
        let body = FULL_PRODUCT.replace(r#"<span id="productTitle">   Widget   </span>"#, "");
        let product = parse_product_page(&product_page(&body), PRODUCT_URL).unwrap();

        assert_eq!(product.title, "");
        assert_eq!(product.price, "$19.99");
        assert_eq!(product.rating, "4.5");
        assert_eq!(product.image, "http://x/img.png");
    }

    #[test]
    fn partial_price_fragments_yield_empty_price() {
        let body = FULL_PRODUCT.replace(r#"<span class="a-price-fraction">99</span>"#, "");
        let product = parse_product_page(&product_page(&body), PRODUCT_URL).unwrap();

        assert_eq!(product.price, "");
        assert_eq!(product.title, "Widget");
    }

    #[test]
    fn missing_rating_leaves_other_fields_intact() {
        let body = FULL_PRODUCT.replace(
            r#"<span id="acrPopover" title="4.5 out of 5 stars"></span>"#,
            "",
        );
        let product = parse_product_page(&product_page(&body), PRODUCT_URL).unwrap();

        assert_eq!(product.rating, "");
        assert_eq!(product.title, "Widget");
        assert_eq!(product.price, "$19.99");
        assert_eq!(product.image, "http://x/img.png");
        assert_eq!(product.url, PRODUCT_URL);
    }

    #[test]
    fn missing_image_leaves_other_fields_intact() {
        let body = FULL_PRODUCT.replace(r#"<img id="landingImage" src="http://x/img.png">"#, "");
        let product = parse_product_page(&product_page(&body), PRODUCT_URL).unwrap();

        assert_eq!(product.image, "");
        assert_eq!(product.title, "Widget");
        assert_eq!(product.price, "$19.99");
        assert_eq!(product.rating, "4.5");
        assert_eq!(product.url, PRODUCT_URL);
    }

    #[test]
    fn rating_without_title_attribute_is_empty() {
        let product =
            parse_product_page(&product_page(r#"<span id="acrPopover"></span>"#), PRODUCT_URL)
                .unwrap();
        assert_eq!(product.rating, "");
    }

    const SEARCH_PAGE: &str = r#"
        <html><body>
        <div data-component-type="s-search-result">
            <a class="a-link-normal s-underline-text s-underline-link-text s-link-style a-text-normal" href="/first/dp/A1">link</a>
            <span class="a-size-base-plus a-color-base a-text-normal">First keyboard</span>
            <span class="a-offscreen">$29.99</span>
            <span class="a-icon-alt">4.4 out of 5 stars</span>
            <img class="s-image" src="https://img/1.jpg">
        </div>
        <div data-component-type="s-search-result">
            <a class="a-link-normal s-underline-text s-underline-link-text s-link-style a-text-normal" href="/second/dp/B2">link</a>
            <span class="a-size-base-plus a-color-base a-text-normal">Second keyboard</span>
            <img class="s-image" src="https://img/2.jpg">
        </div>
        <div class="ad">not a result</div>
        </body></html>
    "#;

    #[test]
    fn parses_each_search_result_block() {
        let page = Html::parse_document(SEARCH_PAGE);
        let products = parse_search_results(&page, "https://www.amazon.com").unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "First keyboard");
        assert_eq!(products[0].price, "$29.99");
        assert_eq!(products[0].rating, "4.4 out of 5 stars");
        assert_eq!(products[0].image, "https://img/1.jpg");
        assert_eq!(products[1].title, "Second keyboard");
        assert_eq!(products[1].price, "");
        assert_eq!(products[1].rating, "");
    }

    #[test]
    fn search_results_share_the_first_link_on_the_page() {
        let page = Html::parse_document(SEARCH_PAGE);
        let products = parse_search_results(&page, "https://www.amazon.com/").unwrap();

        assert!(
            products
                .iter()
                .all(|p| p.url == "https://www.amazon.com/first/dp/A1")
        );
    }

    #[test]
    fn empty_search_page_yields_no_products() {
        let page = Html::parse_document("<html><body><p>No results</p></body></html>");
        let products = parse_search_results(&page, "https://www.amazon.com").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn builds_encoded_search_url() {
        assert_eq!(
            search_url("https://www.amazon.com", "gaming keyboard").unwrap(),
            "https://www.amazon.com/s?k=gaming+keyboard"
        );
    }
}
