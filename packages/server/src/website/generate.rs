//! AI generator adapter.
//!
//! Wraps the OpenAI client behind a never-failing interface: when no usable
//! key is configured, or when anything goes wrong talking to the backend
//! (network, auth, quota, malformed reply), the deterministic demo generator
//! produces the result instead. Callers always get a `GenerationOutcome`.

use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use serde_json::Value;

use super::demo::generate_demo_website;
use super::types::{GeneratedContent, GenerationRequest};

/// Model used for website generation.
const GENERATION_MODEL: &str = "gpt-4o";

/// Sampling temperature: enough variety without losing document structure.
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Keys that mean "no key": scaffolding defaults shipped in env templates.
const PLACEHOLDER_KEYS: [&str; 2] = ["default_key", "your_openai_api_key_here"];

const SYSTEM_PROMPT: &str = "You are an expert web developer and designer who \
creates beautiful, professional websites. Always respond with valid JSON.";

/// Which path produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    /// The AI backend returned a well-formed website.
    Ai,
    /// The deterministic demo generator ran, either because no key is
    /// configured or because the backend call failed.
    Demo,
}

/// The result of a generation call. Both sources terminate identically for
/// the caller; the source is exposed so logs and tests can tell them apart.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub content: GeneratedContent,
    pub source: GenerationSource,
}

/// Website generator with transparent demo-mode fallback.
pub struct WebsiteGenerator {
    client: Option<OpenAIClient>,
}

impl WebsiteGenerator {
    /// Create a generator. Placeholder keys are treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        let client = api_key
            .filter(|key| !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key.as_str()))
            .map(OpenAIClient::new);

        if client.is_none() {
            tracing::info!("No usable OpenAI API key found, using demo mode");
        }

        Self { client }
    }

    /// Create a generator backed by a specific client (tests, proxies).
    pub fn with_client(client: OpenAIClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// True when generation will always take the demo path.
    pub fn demo_mode(&self) -> bool {
        self.client.is_none()
    }

    /// Generate a website for a validated request.
    ///
    /// Never fails: every call terminates with content.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let Some(client) = &self.client else {
            return GenerationOutcome {
                content: generate_demo_website(request),
                source: GenerationSource::Demo,
            };
        };

        match generate_with_ai(client, request).await {
            Ok(content) => GenerationOutcome {
                content,
                source: GenerationSource::Ai,
            },
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    name = %request.name,
                    "AI generation failed, falling back to demo mode"
                );
                GenerationOutcome {
                    content: generate_demo_website(request),
                    source: GenerationSource::Demo,
                }
            }
        }
    }
}

async fn generate_with_ai(
    client: &OpenAIClient,
    request: &GenerationRequest,
) -> Result<GeneratedContent, OpenAIError> {
    let chat_request = ChatRequest::new(GENERATION_MODEL)
        .message(Message::system(SYSTEM_PROMPT))
        .message(Message::user(build_prompt(request)))
        .temperature(GENERATION_TEMPERATURE);

    let json = client.json_completion(chat_request).await?;
    parse_generated(&json)
}

/// Build the generation prompt embedding every field of the request.
fn build_prompt(request: &GenerationRequest) -> String {
    let image_list = if request.image_urls.is_empty() {
        "No images provided".to_string()
    } else {
        format!("Images to Include: {}", request.image_urls.join(", "))
    };

    let mut prompt = format!(
        "You are an expert web developer and designer. Generate a complete, \
professional website based on the following requirements:\n\n\
Website Name: {name}\n\
Description: {description}\n\
Include Navigation: {nav}\n\
Include Footer: {footer}\n\
Include Contact Form: {contact}\n\
Responsive Design: {responsive}\n\
Primary Color: {primary}\n\
Secondary Color: {secondary}\n\
{image_list}\n\n\
Generate a complete website with:\n\
1. Semantic HTML structure\n\
2. Modern CSS styling with responsive design using the specified color scheme\n\
3. Navigation menu with relevant sections\n\
4. Footer with contact information and links\n\
5. Hero section and content sections\n\
6. Use the provided primary color ({primary}) and secondary color ({secondary}) throughout the design\n\
7. {contact_line}\n",
        name = request.name,
        description = request.description,
        nav = request.include_navigation,
        footer = request.include_footer,
        contact = request.include_contact_form,
        responsive = request.is_responsive,
        primary = request.primary_color,
        secondary = request.secondary_color,
        image_list = image_list,
        contact_line = if request.include_contact_form {
            "A contact form"
        } else {
            "No contact form needed"
        },
    );

    if !request.image_urls.is_empty() {
        prompt.push_str(
            "8. Include the provided images in an attractive layout - use the \
first image as a hero background if appropriate\n",
        );
    }

    prompt.push_str(&format!(
        "\nColor Usage Guidelines:\n\
- Use {primary} for primary elements like buttons, navigation, headings\n\
- Use {secondary} for accents, hover states, and secondary elements\n\
- Create gradients between these colors where appropriate\n\
- Ensure good contrast for readability\n",
        primary = request.primary_color,
        secondary = request.secondary_color,
    ));

    if !request.image_urls.is_empty() {
        prompt.push_str(&format!(
            "\nImage Integration:\n\
- First image: Use as hero background or prominent feature\n\
- Additional images: Create an image gallery or integrate throughout content\n\
- All images should use the provided URLs: {}\n\
- Add proper alt tags and responsive sizing\n",
            request.image_urls.join(", "),
        ));
    }

    prompt.push_str(
        "\nReturn the response as JSON with this exact structure:\n\
{\n\
  \"html\": \"complete HTML document\",\n\
  \"css\": \"complete CSS styles with the specified color scheme\",\n\
  \"navigationItems\": [\"array\", \"of\", \"navigation\", \"menu\", \"items\"],\n\
  \"footerContent\": \"footer content description\"\n\
}\n\n\
Make the design modern, professional, and visually appealing. Use \
contemporary web design patterns, proper spacing, and good typography. \
Ensure the content is relevant to the website description provided.\n",
    );

    prompt
}

/// Parse the backend's JSON reply into generated content.
///
/// All four fields must be present; `navigationItems` is coerced to an
/// empty list when it is not an array.
fn parse_generated(json: &str) -> Result<GeneratedContent, OpenAIError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| OpenAIError::Parse(format!("Response is not valid JSON: {}", e)))?;

    let html = field(&value, "html")?
        .as_str()
        .ok_or_else(|| OpenAIError::Parse("`html` must be a string".into()))?
        .to_string();
    let css = field(&value, "css")?
        .as_str()
        .ok_or_else(|| OpenAIError::Parse("`css` must be a string".into()))?
        .to_string();
    let footer_content = field(&value, "footerContent")?
        .as_str()
        .ok_or_else(|| OpenAIError::Parse("`footerContent` must be a string".into()))?
        .to_string();

    let navigation_items = match field(&value, "navigationItems")? {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    };

    Ok(GeneratedContent {
        html,
        css,
        navigation_items,
        footer_content,
    })
}

fn field<'a>(value: &'a Value, name: &str) -> Result<&'a Value, OpenAIError> {
    value
        .get(name)
        .ok_or_else(|| OpenAIError::Parse(format!("Response missing required field `{}`", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Acme Studio",
            "description": "A professional landing page for a small design studio based in town.",
            "imageUrls": ["https://example.com/hero.png"],
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_to_demo() {
        let generator = WebsiteGenerator::new(None);
        assert!(generator.demo_mode());

        let req = request();
        let outcome = generator.generate(&req).await;
        assert_eq!(outcome.source, GenerationSource::Demo);
        assert_eq!(outcome.content, generate_demo_website(&req));
    }

    #[tokio::test]
    async fn test_placeholder_key_falls_back_to_demo() {
        for key in PLACEHOLDER_KEYS {
            let generator = WebsiteGenerator::new(Some(key.to_string()));
            assert!(generator.demo_mode());

            let req = request();
            let outcome = generator.generate(&req).await;
            assert_eq!(outcome.source, GenerationSource::Demo);
            assert_eq!(outcome.content, generate_demo_website(&req));
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_falls_back_to_demo() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client =
            OpenAIClient::new("sk-test").with_base_url("http://127.0.0.1:1/v1");
        let generator = WebsiteGenerator::with_client(client);
        assert!(!generator.demo_mode());

        let req = request();
        let outcome = generator.generate(&req).await;
        assert_eq!(outcome.source, GenerationSource::Demo);
        assert_eq!(outcome.content, generate_demo_website(&req));
    }

    #[test]
    fn test_prompt_embeds_every_field() {
        let req = request();
        let prompt = build_prompt(&req);

        assert!(prompt.contains("Website Name: Acme Studio"));
        assert!(prompt.contains("Include Navigation: true"));
        assert!(prompt.contains("Include Contact Form: false"));
        assert!(prompt.contains("Primary Color: #667eea"));
        assert!(prompt.contains("Images to Include: https://example.com/hero.png"));
        assert!(prompt.contains("first image as a hero background"));
        assert!(prompt.contains("\"navigationItems\""));
    }

    #[test]
    fn test_prompt_without_images() {
        let mut req = request();
        req.image_urls.clear();
        let prompt = build_prompt(&req);

        assert!(prompt.contains("No images provided"));
        assert!(!prompt.contains("Image Integration"));
    }

    #[test]
    fn test_parse_complete_response() {
        let content = parse_generated(
            r#"{
                "html": "<div>hi</div>",
                "css": "body {}",
                "navigationItems": ["Home", "About"],
                "footerContent": "footer"
            }"#,
        )
        .unwrap();

        assert_eq!(content.html, "<div>hi</div>");
        assert_eq!(content.navigation_items, vec!["Home", "About"]);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        for missing in ["html", "css", "navigationItems", "footerContent"] {
            let mut value = serde_json::json!({
                "html": "<div></div>",
                "css": "body {}",
                "navigationItems": [],
                "footerContent": "footer"
            });
            value.as_object_mut().unwrap().remove(missing);

            let err = parse_generated(&value.to_string()).unwrap_err();
            assert!(err.to_string().contains(missing), "field: {}", missing);
        }
    }

    #[test]
    fn test_parse_coerces_non_array_navigation() {
        let content = parse_generated(
            r#"{
                "html": "<div></div>",
                "css": "body {}",
                "navigationItems": "Home",
                "footerContent": "footer"
            }"#,
        )
        .unwrap();

        assert!(content.navigation_items.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_generated("not json").is_err());
    }
}
