//! Built-in post catalog shipped with the site.

/// Static form of a [`PostRecord`](crate::PostRecord) for the compiled-in catalog
pub(crate) struct SeedPost {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub color: &'static str,
    pub image: &'static str,
    pub desc: &'static str,
}

pub(crate) const SEED_POSTS: &[SeedPost] = &[
    // SEO (Orange Theme)
    SeedPost {
        title: "The Future of SEO in 2025",
        category: "SEO",
        date: "Jan 20, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1572021335469-3157207b7000?auto=format&fit=crop&w=600&q=80",
        desc: "AI and voice search are redefining how we rank. Learn the new strategies.",
    },
    SeedPost {
        title: "Local SEO: Dominating Varanasi",
        category: "SEO",
        date: "Jan 18, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=600&q=80",
        desc: "How to rank your business in local map packs and get more foot traffic.",
    },
    SeedPost {
        title: "Backlinks vs. Content",
        category: "SEO",
        date: "Jan 15, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1557838923-2985c318be48?auto=format&fit=crop&w=600&q=80",
        desc: "Which is more important for ranking in Google? The answer might surprise you.",
    },
    SeedPost {
        title: "Technical SEO Checklist",
        category: "SEO",
        date: "Jan 12, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?auto=format&fit=crop&w=600&q=80",
        desc: "Ensure your site is crawlable and indexable with this technical guide.",
    },
    SeedPost {
        title: "Voice Search Optimization",
        category: "SEO",
        date: "Jan 10, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1589254065878-42c9daf97008?auto=format&fit=crop&w=600&q=80",
        desc: "Optimizing for Alexa, Siri, and Google Assistant is no longer optional.",
    },
    SeedPost {
        title: "Mobile-First Indexing",
        category: "SEO",
        date: "Jan 08, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1526498460520-4c246339dccb?auto=format&fit=crop&w=600&q=80",
        desc: "Why your mobile site matters more than desktop for Google ranking.",
    },
    SeedPost {
        title: "Keyword Research Tools",
        category: "SEO",
        date: "Jan 05, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=600&q=80",
        desc: "Top 5 free tools to find high-volume keywords with low competition.",
    },
    SeedPost {
        title: "SEO for E-commerce",
        category: "SEO",
        date: "Jan 02, 2025",
        color: "orange",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=600&q=80",
        desc: "Driving sales through organic search traffic for online stores.",
    },
    SeedPost {
        title: "Core Web Vitals Guide",
        category: "SEO",
        date: "Dec 28, 2024",
        color: "orange",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=600&q=80",
        desc: "Improving LCP, FID, and CLS for better rankings.",
    },
    SeedPost {
        title: "Google Algorithm Updates",
        category: "SEO",
        date: "Dec 25, 2024",
        color: "orange",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=600&q=80",
        desc: "How to survive the latest core updates.",
    },

    // Social Media (Blue Theme)
    SeedPost {
        title: "Instagram Reels Strategy",
        category: "Social Media",
        date: "Dec 22, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?auto=format&fit=crop&w=600&q=80",
        desc: "How to go viral with short-form video content on Instagram.",
    },
    SeedPost {
        title: "LinkedIn for B2B Leads",
        category: "Social Media",
        date: "Dec 20, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1616469829581-73993eb86b02?auto=format&fit=crop&w=600&q=80",
        desc: "Turning connections into high-paying clients on LinkedIn.",
    },
    SeedPost {
        title: "Facebook Ads vs. Boost",
        category: "Social Media",
        date: "Dec 18, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1611162618071-b39a2ec055fb?auto=format&fit=crop&w=600&q=80",
        desc: "Stop boosting posts; start running professional ad campaigns.",
    },
    SeedPost {
        title: "Influencer Marketing 101",
        category: "Social Media",
        date: "Dec 15, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1557838923-2985c318be48?auto=format&fit=crop&w=600&q=80",
        desc: "How to choose the right influencer for your brand without wasting money.",
    },
    SeedPost {
        title: "Social Media Calendar",
        category: "Social Media",
        date: "Dec 12, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1506784983877-45594fa4c5c3?auto=format&fit=crop&w=600&q=80",
        desc: "Plan a month of content in just one hour with this template.",
    },
    SeedPost {
        title: "Twitter (X) for Business",
        category: "Social Media",
        date: "Dec 10, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1611605698335-8b1569810432?auto=format&fit=crop&w=600&q=80",
        desc: "Is X still relevant for marketing in 2025?",
    },
    SeedPost {
        title: "YouTube Shorts Growth",
        category: "Social Media",
        date: "Dec 08, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&w=600&q=80",
        desc: "Leveraging YouTube's algorithm for quick growth.",
    },
    SeedPost {
        title: "Community Management",
        category: "Social Media",
        date: "Dec 05, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1529236183278-96038939865d?auto=format&fit=crop&w=600&q=80",
        desc: "Building a loyal tribe around your brand.",
    },
    SeedPost {
        title: "User Generated Content",
        category: "Social Media",
        date: "Dec 02, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?auto=format&fit=crop&w=600&q=80",
        desc: "Why UGC converts better than professional ads.",
    },
    SeedPost {
        title: "Social Media Trends 2025",
        category: "Social Media",
        date: "Nov 30, 2024",
        color: "blue",
        image: "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?auto=format&fit=crop&w=600&q=80",
        desc: "What's next for social media platforms?",
    },

    // PPC (Purple Theme)
    SeedPost {
        title: "Maximizing ROAS",
        category: "PPC Ads",
        date: "Nov 28, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1553729459-efe14ef6055d?auto=format&fit=crop&w=600&q=80",
        desc: "Get more revenue for every rupee spent on ads.",
    },
    SeedPost {
        title: "Google Ads Bidding",
        category: "PPC Ads",
        date: "Nov 25, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1590212151175-e5879610801b?auto=format&fit=crop&w=600&q=80",
        desc: "Manual vs. Automated bidding strategies explained.",
    },
    SeedPost {
        title: "Retargeting Magic",
        category: "PPC Ads",
        date: "Nov 22, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?auto=format&fit=crop&w=600&q=80",
        desc: "Bringing back visitors who didn't buy.",
    },
    SeedPost {
        title: "Copywriting for Ads",
        category: "PPC Ads",
        date: "Nov 20, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1455849318743-b2233052fcff?auto=format&fit=crop&w=600&q=80",
        desc: "Writing headlines that get high CTR.",
    },
    SeedPost {
        title: "Landing Page Optimization",
        category: "PPC Ads",
        date: "Nov 18, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=600&q=80",
        desc: "Why your ads get clicks but no sales.",
    },
    SeedPost {
        title: "Competitor Analysis",
        category: "PPC Ads",
        date: "Nov 15, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?auto=format&fit=crop&w=600&q=80",
        desc: "Spying on your competitors' ad strategies.",
    },
    SeedPost {
        title: "YouTube Video Ads",
        category: "PPC Ads",
        date: "Nov 12, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&w=600&q=80",
        desc: "Cheaper and more effective than you think.",
    },
    SeedPost {
        title: "Performance Max Campaigns",
        category: "PPC Ads",
        date: "Nov 10, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=600&q=80",
        desc: "Mastering Google's AI-driven ad format.",
    },
    SeedPost {
        title: "A/B Testing Guide",
        category: "PPC Ads",
        date: "Nov 08, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1507238691940-0db597a92b83?auto=format&fit=crop&w=600&q=80",
        desc: "The scientific way to improve ad performance.",
    },
    SeedPost {
        title: "PPC for Small Business",
        category: "PPC Ads",
        date: "Nov 05, 2024",
        color: "purple",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=600&q=80",
        desc: "Budget-friendly ad strategies for startups.",
    },

    // Web Dev (Green Theme)
    SeedPost {
        title: "WordPress vs. Coding",
        category: "Web Dev",
        date: "Nov 02, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=600&q=80",
        desc: "Which platform is right for your business?",
    },
    SeedPost {
        title: "Website Speed Optimization",
        category: "Web Dev",
        date: "Oct 30, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1537432376769-00f5c2f4c8d2?auto=format&fit=crop&w=600&q=80",
        desc: "Loading in under 2 seconds keeps users happy.",
    },
    SeedPost {
        title: "UI/UX Best Practices",
        category: "Web Dev",
        date: "Oct 28, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c?auto=format&fit=crop&w=600&q=80",
        desc: "Designing for the user, not just for looks.",
    },
    SeedPost {
        title: "Responsive Design",
        category: "Web Dev",
        date: "Oct 25, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=600&q=80",
        desc: "Ensuring your site looks good on all devices.",
    },
    SeedPost {
        title: "E-commerce Security",
        category: "Web Dev",
        date: "Oct 22, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&w=600&q=80",
        desc: "Protecting your customer data and payments.",
    },
    SeedPost {
        title: "Web Accessibility (A11y)",
        category: "Web Dev",
        date: "Oct 20, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1551033406-611cf9a28f67?auto=format&fit=crop&w=600&q=80",
        desc: "Making your website usable for everyone.",
    },
    SeedPost {
        title: "Selecting a Hosting Provider",
        category: "Web Dev",
        date: "Oct 18, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?auto=format&fit=crop&w=600&q=80",
        desc: "Why cheap hosting costs you more in the long run.",
    },
    SeedPost {
        title: "The Power of Landing Pages",
        category: "Web Dev",
        date: "Oct 15, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?auto=format&fit=crop&w=600&q=80",
        desc: "Stripping away distractions to focus on sales.",
    },
    SeedPost {
        title: "JavaScript Frameworks",
        category: "Web Dev",
        date: "Oct 12, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?auto=format&fit=crop&w=600&q=80",
        desc: "React, Vue, or Angular: What to choose?",
    },
    SeedPost {
        title: "Website Maintenance",
        category: "Web Dev",
        date: "Oct 10, 2024",
        color: "green",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=600&q=80",
        desc: "Why regular updates prevent hacking.",
    },

    // Design & Content (Red Theme)
    SeedPost {
        title: "Color Psychology",
        category: "Design",
        date: "Oct 08, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1558655146-d09347e92766?auto=format&fit=crop&w=600&q=80",
        desc: "How colors influence purchasing decisions.",
    },
    SeedPost {
        title: "Typography Trends",
        category: "Design",
        date: "Oct 05, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&w=600&q=80",
        desc: "Choosing the right font for your brand voice.",
    },
    SeedPost {
        title: "Logo Design Basics",
        category: "Design",
        date: "Oct 02, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1626785774573-4b799315345d?auto=format&fit=crop&w=600&q=80",
        desc: "What makes a memorable logo?",
    },
    SeedPost {
        title: "Canva vs. Photoshop",
        category: "Design",
        date: "Sep 30, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&w=600&q=80",
        desc: "Do you really need expensive software?",
    },
    SeedPost {
        title: "Visual Hierarchy",
        category: "Design",
        date: "Sep 28, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1507238691940-0db597a92b83?auto=format&fit=crop&w=600&q=80",
        desc: "Guiding the user's eye to the call to action.",
    },
    SeedPost {
        title: "Blogging for Business",
        category: "Content",
        date: "Sep 25, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?auto=format&fit=crop&w=600&q=80",
        desc: "Why a blog is your best salesperson.",
    },
    SeedPost {
        title: "Email Marketing Funnels",
        category: "Content",
        date: "Sep 22, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&w=600&q=80",
        desc: "Nurturing leads from cold to sold.",
    },
    SeedPost {
        title: "Video Content Strategy",
        category: "Content",
        date: "Sep 20, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1536240478700-b869070f9279?auto=format&fit=crop&w=600&q=80",
        desc: "Why video is consuming the internet.",
    },
    SeedPost {
        title: "Podcasting for Brands",
        category: "Content",
        date: "Sep 18, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?auto=format&fit=crop&w=600&q=80",
        desc: "Building authority through audio content.",
    },
    SeedPost {
        title: "The Art of Storytelling",
        category: "Content",
        date: "Sep 15, 2024",
        color: "red",
        image: "https://images.unsplash.com/photo-1455849318743-b2233052fcff?auto=format&fit=crop&w=600&q=80",
        desc: "Connecting emotionally with your audience.",
    },
];
