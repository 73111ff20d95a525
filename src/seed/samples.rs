use crate::creators::CreatorFields;

const AVATAR: &str =
    "https://yt3.googleusercontent.com/ytc/APkrFKZWeMCsx4Q9e_Hm6nhOOUQ3fv96QGUXiMr1pPPs=s176-c-k-c0x00ffffff-no-rj";

const SAMPLES: [(&str, &str, &str); 7] = [
    (
        "Linus Tech Tips",
        "https://www.youtube.com/@LinusTechTips",
        "Technology reviews, PC builds, and tech news from Linus Sebastian and his team. Known for detailed hardware reviews and entertaining tech content.",
    ),
    (
        "MrBeast",
        "https://www.youtube.com/@MrBeast",
        "Philanthropist and content creator known for massive giveaways, challenges, and charitable acts. One of the most subscribed YouTubers globally.",
    ),
    (
        "Marques Brownlee (MKBHD)",
        "https://www.youtube.com/@mkbhd",
        "Tech reviewer and YouTuber specializing in smartphone and gadget reviews. Known for high-quality production and detailed analysis.",
    ),
    (
        "PewDiePie",
        "https://www.youtube.com/@PewDiePie",
        "Swedish YouTuber and internet personality known for gaming content, memes, and commentary. One of the most influential content creators.",
    ),
    (
        "Mark Rober",
        "https://www.youtube.com/@MarkRober",
        "Former NASA engineer turned YouTuber creating science and engineering content. Known for creative experiments and educational videos.",
    ),
    (
        "Emma Chamberlain",
        "https://www.youtube.com/@emmachamberlain",
        "Lifestyle and fashion YouTuber known for her authentic vlogs, coffee content, and relatable personality. Popular among Gen Z audiences.",
    ),
    (
        "David Dobrik",
        "https://www.youtube.com/@DavidDobrik",
        "Vlogger and content creator known for his fast-paced vlogs, pranks, and collaborations with other creators. Popular for his energetic style.",
    ),
];

/// The fixed sample set written by the seed loader, in insert order.
pub fn sample_creators() -> Vec<CreatorFields> {
    SAMPLES
        .iter()
        .map(|(name, url, description)| CreatorFields {
            name: (*name).to_string(),
            url: (*url).to_string(),
            description: (*description).to_string(),
            image_url: Some(AVATAR.to_string()),
        })
        .collect()
}
