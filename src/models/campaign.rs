use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Shop;

/// UI slot a promotion campaign is bought for. Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignType {
    TopFeedSlideshow = 1,
}

impl CampaignType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShopPromotionCampaign {
    pub id: i32,
    pub owner_id: i32,
    pub shop_id: i32, // promoted shop
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub campaign_type: i32,
    pub active: bool,
}

impl Default for ShopPromotionCampaign {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            owner_id: 0,
            shop_id: 0,
            start_date: now,
            end_date: now,
            campaign_type: CampaignType::TopFeedSlideshow.code(),
            active: true,
        }
    }
}

/// Campaign joined with the shop it promotes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PromotedShop {
    pub campaign_id: i32,
    #[sqlx(flatten)]
    pub shop: Shop,
}

/// Named eligibility rule for campaigns: active, running at `at`, and bought
/// for `placement`. All three conditions must hold.
#[derive(Debug, Clone, Copy)]
pub struct CampaignScope {
    pub placement: CampaignType,
    pub at: DateTime<Utc>,
}

impl CampaignScope {
    pub fn valid_for(placement: CampaignType, at: DateTime<Utc>) -> Self {
        Self { placement, at }
    }

    pub fn matches(&self, campaign: &ShopPromotionCampaign) -> bool {
        campaign.active
            && campaign.start_date <= self.at
            && self.at <= campaign.end_date
            && campaign.campaign_type == self.placement.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn running_campaign(now: DateTime<Utc>) -> ShopPromotionCampaign {
        ShopPromotionCampaign {
            id: 1,
            owner_id: 1,
            shop_id: 1,
            start_date: now - Duration::days(1),
            end_date: now + Duration::days(1),
            campaign_type: CampaignType::TopFeedSlideshow.code(),
            active: true,
        }
    }

    #[test]
    fn running_active_slideshow_campaign_matches() {
        let now = Utc::now();
        let scope = CampaignScope::valid_for(CampaignType::TopFeedSlideshow, now);
        assert!(scope.matches(&running_campaign(now)));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let now = Utc::now();
        let scope = CampaignScope::valid_for(CampaignType::TopFeedSlideshow, now);

        let mut starts_now = running_campaign(now);
        starts_now.start_date = now;
        assert!(scope.matches(&starts_now));

        let mut ends_now = running_campaign(now);
        ends_now.end_date = now;
        assert!(scope.matches(&ends_now));
    }

    #[test]
    fn each_condition_excludes_on_its_own() {
        let now = Utc::now();
        let scope = CampaignScope::valid_for(CampaignType::TopFeedSlideshow, now);

        let mut inactive = running_campaign(now);
        inactive.active = false;
        assert!(!scope.matches(&inactive));

        let mut other_type = running_campaign(now);
        other_type.campaign_type = 2;
        assert!(!scope.matches(&other_type));

        let mut not_started = running_campaign(now);
        not_started.start_date = now + Duration::seconds(1);
        assert!(!scope.matches(&not_started));

        let mut expired = running_campaign(now);
        expired.end_date = now - Duration::seconds(1);
        assert!(!scope.matches(&expired));
    }

    #[test]
    fn campaign_type_codes() {
        assert_eq!(CampaignType::TopFeedSlideshow.code(), 1);
    }
}
