use crate::domain::AppError;

/// Generation parameters for one banner image.
#[derive(Debug, Clone)]
pub struct BannerRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance_scale: f32,
}

impl BannerRequest {
    /// Banner parameters derived deterministically from the repository name.
    pub fn for_repository(name: &str) -> Self {
        Self {
            prompt: format!(
                "abstract wide banner artwork for a software project called '{name}', \
                 vibrant colors, digital art"
            ),
            negative_prompt: "text, watermark, logo, low quality".to_string(),
            width: 1200,
            height: 400,
            steps: 50,
            guidance_scale: 7.5,
        }
    }
}

pub trait BannerPort {
    /// Generate an image for `request` and return a fetchable URL.
    fn generate(&self, request: &BannerRequest) -> Result<String, AppError>;

    /// Download the generated image.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}
