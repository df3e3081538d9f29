//! Industry-specific content bundles
//!
//! Maps an industry answer to the narrative content the results and solution
//! pages display: insights, the misdiagnosis block, a case study, and CTA
//! copy. Unknown industries fall back to the generic growth-company bundle.

use once_cell::sync::Lazy;

/// Before/after metric row in a case study.
#[derive(Debug, Clone)]
pub struct CaseStudyMetric {
    pub label: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

/// "You think X, actually Y" narrative block.
#[derive(Debug, Clone)]
pub struct Misdiagnosis {
    pub think_headline: &'static str,
    pub actually_headline: &'static str,
    pub story: &'static str,
    pub key_insight: &'static str,
}

/// A canned success story.
#[derive(Debug, Clone)]
pub struct CaseStudy {
    pub company: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub metrics: Vec<CaseStudyMetric>,
    pub quote: &'static str,
    pub quote_name: &'static str,
    pub quote_role: &'static str,
    pub outcome: &'static str,
}

/// Everything the funnel shows for one industry.
#[derive(Debug, Clone)]
pub struct IndustryContent {
    pub label: &'static str,
    pub tagline: &'static str,
    pub insights: Vec<&'static str>,
    pub hidden_cost_headline: &'static str,
    pub hidden_cost_detail: &'static str,
    pub misdiagnosis: Misdiagnosis,
    pub case_study: CaseStudy,
    pub speed_context: &'static str,
    pub cta_headline: &'static str,
    pub cta_subtext: &'static str,
}

fn metric(label: &'static str, before: &'static str, after: &'static str) -> CaseStudyMetric {
    CaseStudyMetric { label, before, after }
}

static ENTERTAINMENT: Lazy<IndustryContent> = Lazy::new(|| IndustryContent {
    label: "Entertainment & Media",
    tagline: "Production companies, studios, VFX houses, talent management",
    insights: vec![
        "Production companies often see 15-25% EBITDA compression that's actually recoverable margin, not lost revenue.",
        "Your project-based cash flow creates blind spots that standard accounting completely misses.",
        "We've helped VFX studios discover $3.4M in hidden margin — their reported EBITDA was $0.6M, actual was $4.0M.",
        "Union compliance, production accounting, and multi-project tracking require specialized financial operations.",
    ],
    hidden_cost_headline: "Your EBITDA isn't what you think it is.",
    hidden_cost_detail: "Entertainment companies routinely misclassify strategic investments as operating expenses, compress margins during growth phases, and lose visibility across multiple productions. The result: you think you're struggling when you're actually healthy.",
    misdiagnosis: Misdiagnosis {
        think_headline: "You think you need to downscale.",
        actually_headline: "Actually, you have a leakage problem.",
        story: "A VFX studio came to us ready to lay off half their team. Their EBITDA had compressed from 22% to 4%. They were convinced the business was dying.\n\nWe spent three weeks in their data. What we found: reported EBITDA was $0.6M. Actual EBITDA was $4.0M.\n\nThe $3.4M gap? Strategic investments coded as expenses. Pricing discipline erosion nobody was tracking. Productivity leaks across 84 FTEs. One-time costs mixed into operating expenses.\n\nThey didn't need a turnaround. They needed visibility.",
        key_insight: "Every 1% discount they gave was costing them $300K annually. They were throwing around 5% discounts like it was nothing.",
    },
    case_study: CaseStudy {
        company: "Project Apex VFX",
        industry: "Visual Effects Studio",
        challenge: "EBITDA compressed from 22% to 4%, leadership considering major layoffs",
        metrics: vec![
            metric("Reported EBITDA", "$0.6M", "$4.0M (adjusted)"),
            metric("Valuation", "$9M (status quo)", "$36M (optimized)"),
            metric("Hidden Margin", "Unknown", "$3.4M identified"),
            metric("Pricing Leakage", "49% discount rate", "Identified $789K annual impact"),
        ],
        quote: "We thought we needed to cut. They showed us we needed to see.",
        quote_name: "Studio Principal",
        quote_role: "VFX Studio",
        outcome: "Company pivoted from planning layoffs to planning expansion. The only thing that changed was what they could see.",
    },
    speed_context: "Production schedules wait for no one. We know how to move fast without disrupting active projects.",
    cta_headline: "Let's find what's hiding in your production numbers.",
    cta_subtext: "15 minutes. We'll show you what your current setup isn't showing you.",
});

static PROFESSIONAL: Lazy<IndustryContent> = Lazy::new(|| IndustryContent {
    label: "Professional Services",
    tagline: "Law firms, consulting, accounting practices, agencies",
    insights: vec![
        "Professional services firms typically leave 15-20% on the table through unbilled time and poor utilization tracking.",
        "Your utilization rates are telling a story your current reports don't show.",
        "Partner distributions and compensation structures often mask true profitability by practice area.",
        "Multi-partner practices have hidden cash flow timing issues that surface during growth or transition.",
    ],
    hidden_cost_headline: "You're billing for hours but missing the margins.",
    hidden_cost_detail: "Professional services profitability lives in the details: utilization rates, realization rates, practice area margins, partner allocations. Most firms track revenue but not the profitability drivers underneath.",
    misdiagnosis: Misdiagnosis {
        think_headline: "You think you need more clients.",
        actually_headline: "Actually, you need better visibility into the clients you have.",
        story: "A CPA practice with 20+ entities and 100+ accounts was drowning in work but couldn't explain why profits weren't keeping pace with revenue.\n\nWe found the problem wasn't volume — it was margin erosion. Low-value clients consuming high-value staff time. Realization rates varying wildly across practice areas. Partner time leaking into administrative work.\n\nWithin 90 days, we helped them identify which clients were profitable and which were destroying value. They didn't need more work. They needed to see which work mattered.",
        key_insight: "They reduced hands-on bookkeeping time by 70-80% while actually improving accuracy.",
    },
    case_study: CaseStudy {
        company: "Regional CPA Practice",
        industry: "Accounting & Advisory",
        challenge: "Managing 20+ entities and 100+ accounts with no consolidated view",
        metrics: vec![
            metric("Hands-on Time", "100%", "20-30% (70-80% reduction)"),
            metric("Entities Managed", "20+", "20+ (same, but visible)"),
            metric("Accounts Reconciled", "100+", "100+ (automated)"),
            metric("Partner Admin Time", "15+ hrs/week", "2-3 hrs/week"),
        ],
        quote: "We finally know which clients make us money and which ones cost us.",
        quote_name: "Managing Partner",
        quote_role: "CPA Practice",
        outcome: "Partners reclaimed strategic time. The practice grew 30% the following year by focusing on profitable work.",
    },
    speed_context: "We understand billable hours. We won't waste yours.",
    cta_headline: "Let's find the margin hiding in your practice.",
    cta_subtext: "15 minutes. Partner to partner.",
});

static ECOMMERCE: Lazy<IndustryContent> = Lazy::new(|| IndustryContent {
    label: "E-commerce & DTC",
    tagline: "Shopify, Amazon, DTC brands, multi-channel retail",
    insights: vec![
        "E-commerce cash flow runs 3-6 months ahead of your P&L — most accounting setups completely miss this.",
        "Inventory timing creates blind spots that compound during growth spurts and seasonal peaks.",
        "Multi-channel selling (Shopify + Amazon + TikTok + Walmart) fragments your financial picture.",
        "We've seen brands discover they're profitable when they thought they were losing money — and vice versa.",
    ],
    hidden_cost_headline: "Your P&L is lying to you.",
    hidden_cost_detail: "E-commerce accounting is uniquely broken. You buy inventory months before you sell it. Platform fees hit at different times. Returns mess up your numbers. COGS is a guess. By the time your books close, the moment has passed.",
    misdiagnosis: Misdiagnosis {
        think_headline: "You think you have a cash flow problem.",
        actually_headline: "Actually, you have a timing visibility problem.",
        story: "An apparel brand scaling from $6M to $50M thought they were bleeding cash. Every growth push felt like a crisis. They were considering slowing down.\n\nWe rebuilt their financial picture around cash flow timing, not GAAP accounting. What we found: they were actually more profitable during growth phases, but the cash lag from 6-month China lead times made it invisible.\n\nThey didn't have a profitability problem. They had a visibility problem that was making them afraid of their own success.",
        key_insight: "They cut financial operations cost by 50% while scaling 8x. The constraint was never money — it was sight.",
    },
    case_study: CaseStudy {
        company: "DTC Apparel Brand",
        industry: "E-commerce / Consumer Goods",
        challenge: "Scaling from $6M to $50M+ with no visibility into true profitability",
        metrics: vec![
            metric("Revenue", "$6M", "$50M+"),
            metric("Finance Ops Cost", "100%", "50% (half the cost)"),
            metric("Cash Flow Visibility", "30 days", "180 days forward"),
            metric("Decision Confidence", "Guessing", "Data-driven"),
        ],
        quote: "We were afraid to grow because we couldn't see where the money was going. Now we can see everything.",
        quote_name: "Founder",
        quote_role: "DTC Brand",
        outcome: "Brand scaled 8x in three years. Every growth decision backed by real-time financial intelligence.",
    },
    speed_context: "Peak season waits for no one. We can be live before your next inventory buy.",
    cta_headline: "Let's find what's hiding in your channels.",
    cta_subtext: "15 minutes. We'll show you what Shopify and Amazon aren't telling you.",
});

static MULTI: Lazy<IndustryContent> = Lazy::new(|| IndustryContent {
    label: "Multi-Entity Operations",
    tagline: "Holding companies, portfolio operators, serial entrepreneurs",
    insights: vec![
        "Multi-entity operators almost always have consolidation gaps hiding real performance across the portfolio.",
        "You're probably making investment decisions on incomplete data — each entity's books don't tell the whole story.",
        "Intercompany transactions, shared services allocation, and entity-level cash flow are where the real story lives.",
        "The complexity tax of managing multiple books often exceeds the cost of doing it right.",
    ],
    hidden_cost_headline: "You can't see the forest for the trees.",
    hidden_cost_detail: "Each entity has its own books, its own accountant, its own rhythm. But nobody's watching the consolidated picture. Cash moves between entities without tracking. Profitable businesses subsidize struggling ones invisibly. You're running a portfolio blind.",
    misdiagnosis: Misdiagnosis {
        think_headline: "You think Entity C is your problem.",
        actually_headline: "Actually, Entity A has been hiding losses in intercompany transactions.",
        story: "A multi-business operator with 5 entities — restaurants, production, real estate, a grip company, and retail — couldn't figure out why cash was always tight despite \"profitable\" businesses.\n\nWe consolidated everything. What we found: the restaurant had been subsidizing the production company through informal intercompany loans that never got tracked. The \"profitable\" production company was actually burning cash. The real estate entity was throwing off cash that disappeared into operational entities.\n\nThey didn't need to sell anything. They needed to see everything in one place and stop the invisible bleeding.",
        key_insight: "Hidden intercompany subsidies were masking a $400K annual loss in what they thought was their strongest business.",
    },
    case_study: CaseStudy {
        company: "Multi-Business Portfolio",
        industry: "Diversified Holdings",
        challenge: "5+ entities with no consolidated financial picture",
        metrics: vec![
            metric("Entities", "5+ (siloed)", "5+ (consolidated)"),
            metric("Intercompany Visibility", "None", "Real-time"),
            metric("Hidden Subsidies Found", "Unknown", "$400K+ annually"),
            metric("Decision Quality", "Entity-by-entity", "Portfolio-wide"),
        ],
        quote: "I thought I knew my businesses. I was wrong.",
        quote_name: "Portfolio Operator",
        quote_role: "Multi-Entity Holdings",
        outcome: "Restructured the portfolio based on actual performance. Profitable entities got investment. Unprofitable ones got fixed or sold.",
    },
    speed_context: "We've consolidated messier portfolios than yours. Usually faster than you'd expect.",
    cta_headline: "Let's see what your entities are hiding from each other.",
    cta_subtext: "15 minutes. We'll show you the consolidated picture.",
});

static OTHER: Lazy<IndustryContent> = Lazy::new(|| IndustryContent {
    label: "Growth Companies",
    tagline: "Scaling businesses across industries",
    insights: vec![
        "Companies at your stage typically find 3-5 margin leaks when they finally get visibility.",
        "The problem usually isn't the business — it's that your financial infrastructure hasn't kept up with growth.",
        "Most founders underestimate how much their own time costs the business (usually $200-500/hr in opportunity cost).",
        "The gap between 'good enough' accounting and 'growth-ready' accounting is where money disappears.",
    ],
    hidden_cost_headline: "Your accounting grew up, but your infrastructure didn't.",
    hidden_cost_detail: "You started with QuickBooks and a part-time bookkeeper. Now you're a real company, but you're still running on startup infrastructure. The gap is where money, time, and opportunity disappear.",
    misdiagnosis: Misdiagnosis {
        think_headline: "You think you need to hire a controller.",
        actually_headline: "Actually, you need a full department — for less than what you'd pay that controller.",
        story: "A $70M production company was spending $15K/month on a controller who was drowning. Balls were dropping. Reports were late. The founder was back to doing bookkeeping at midnight.\n\nWe replaced the solo controller with a full team: controller, accounting manager, senior accountant, staff accountant, and clerk. All managed. All guaranteed.\n\nThe cost? Less than they were paying before. The coverage? Five people instead of one overwhelmed hire.",
        key_insight: "They went from -5% EBITDA to +8% EBITDA. $12M in liability reduction. And the founder stopped doing bookkeeping.",
    },
    case_study: CaseStudy {
        company: "Production Company",
        industry: "Media Production",
        challenge: "$70M company with controller drowning, founder doing bookkeeping",
        metrics: vec![
            metric("EBITDA", "-5%", "+8%"),
            metric("Liabilities Reduced", "Baseline", "$12M reduction"),
            metric("Founder Time on Finance", "10+ hrs/week", "0 hrs/week"),
            metric("Team Coverage", "1 controller", "Full 5-person department"),
        ],
        quote: "I got my nights back. And my margins.",
        quote_name: "CEO",
        quote_role: "Production Company",
        outcome: "Company went from near-crisis to healthy growth. The founder focused on deals instead of books.",
    },
    speed_context: "We move fast because we've done this before. A lot.",
    cta_headline: "Let's see what a real finance department could do for you.",
    cta_subtext: "15 minutes. No pitch. Just clarity.",
});

/// Content bundle for an industry answer value, generic bundle for anything
/// unrecognized.
pub fn industry_content(industry: &str) -> &'static IndustryContent {
    match industry {
        "entertainment" => &ENTERTAINMENT,
        "professional" => &PROFESSIONAL,
        "ecommerce" => &ECOMMERCE,
        "multi" => &MULTI,
        _ => &OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_industries_resolve() {
        assert_eq!(industry_content("entertainment").label, "Entertainment & Media");
        assert_eq!(industry_content("ecommerce").label, "E-commerce & DTC");
    }

    #[test]
    fn unknown_industry_gets_generic_bundle() {
        assert_eq!(industry_content("saas").label, "Growth Companies");
        assert_eq!(industry_content("").label, "Growth Companies");
    }

    #[test]
    fn every_bundle_is_fully_populated() {
        for industry in ["entertainment", "professional", "ecommerce", "multi", "other"] {
            let content = industry_content(industry);
            assert_eq!(content.insights.len(), 4, "{industry}");
            assert_eq!(content.case_study.metrics.len(), 4, "{industry}");
            assert!(!content.cta_headline.is_empty());
        }
    }
}
