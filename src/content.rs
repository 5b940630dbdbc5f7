//! Copy and decorative figures rendered by the landing page sections.

use serde::{Deserialize, Serialize};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Provider {
    pub label: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Upcoming,
}

impl MilestoneStatus {
    pub fn class(self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "status-completed",
            MilestoneStatus::Current => "status-current",
            MilestoneStatus::Upcoming => "status-upcoming",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub quarter: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: MilestoneStatus,
    pub tag: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenFact {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
}

/// Hard-coded figures for the decorative network status panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkStat {
    pub label: &'static str,
    pub value: &'static str,
    pub class: &'static str,
}

pub const PROVIDERS: [Provider; 3] = [
    Provider { label: "Amazon Web Service", image: "awscloud.png" },
    Provider { label: "Microsoft Azure", image: "azurecloud.png" },
    Provider { label: "Google Cloud", image: "gcloud.png" },
];

pub const ABOUT_FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Globe,
        title: "Global Server Access",
        description: "Connect to servers in over 50 countries for versatile access.",
    },
    Feature {
        icon: Icon::Wallet,
        title: "Top-Level Security",
        description: "End-to-end encryption ensures your data remains secure.",
    },
    Feature {
        icon: Icon::Lock,
        title: "Complete Privacy",
        description: "Surf the web anonymously without leaving a trace.",
    },
];

pub const NETWORK_STATUS: [NetworkStat; 3] = [
    NetworkStat { label: "Servers Online", value: "6/107", class: "stat-red" },
    NetworkStat { label: "Connection Speed", value: "98.7 Mbps", class: "stat-plain" },
    NetworkStat { label: "Users Connected", value: "0", class: "stat-pink" },
];

pub const BENEFITS: [Feature; 6] = [
    Feature {
        icon: Icon::Lock,
        title: "Military-Grade Encryption",
        description: "Stay secure with AES-256 encryption, keeping your data private at all times.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Global Server Access",
        description: "Connect easily to servers in over 50 countries for fast and unrestricted browsing.",
    },
    Feature {
        icon: Icon::Shield,
        title: "No-Logs Policy",
        description: "Your online activities are never tracked or stored, ensuring complete privacy.",
    },
    Feature {
        icon: Icon::Users,
        title: "Multi-Device Support",
        description: "Protect all your devices including smartphones, desktops, and more simultaneously.",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Automatic Kill Switch",
        description: "Your data stays safe even if the VPN connection unexpectedly drops.",
    },
    Feature {
        icon: Icon::Lock,
        title: "DNS Leak Protection",
        description: "Prevent data leaks and keep your DNS queries secure to improve privacy.",
    },
];

pub const PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Basic Plan",
        price: "Free",
        features: &[
            "Access to 3 servers",
            "Up to 3 devices simultaneously",
            "Basic security features",
        ],
    },
    PricingPlan {
        name: "Standard Plan",
        price: "$10.95/month",
        features: &[
            "Access to all servers",
            "Up to 5 devices simultaneously",
            "Enhanced security features",
            "Ad-blocker",
            "24/7 customer support",
        ],
    },
    PricingPlan {
        name: "Premium Plan",
        price: "$18.95/month",
        features: &[
            "Access to all servers",
            "Unlimited devices",
            "Top-tier security features",
            "Ad-blocker",
            "Priority support",
        ],
    },
];

pub const ROADMAP: [Milestone; 4] = [
    Milestone {
        quarter: "Q2 2025",
        title: "VPN Core Implementation",
        description: "Deploy robust VPN architecture for enhanced user privacy and security.",
        status: MilestoneStatus::Completed,
        tag: "Token Integration",
    },
    Milestone {
        quarter: "Q3 2025",
        title: "Global Server Expansion",
        description: "Enhance server reachability to 50+ countries for optimized connectivity.",
        status: MilestoneStatus::Current,
        tag: "Multi-Location Access",
    },
    Milestone {
        quarter: "Q4 2025",
        title: "User Governance Model",
        description: "Introduce user-driven governance for community-led development and features.",
        status: MilestoneStatus::Upcoming,
        tag: "Governance Token",
    },
    Milestone {
        quarter: "Q1 2026",
        title: "Advanced Security Features",
        description: "Integrate AI-based security measures for real-time protection and threat detection.",
        status: MilestoneStatus::Upcoming,
        tag: "Enhanced Security",
    },
];

pub const FAQ: [FaqEntry; 8] = [
    FaqEntry {
        question: "What is a VPN and how does it work?",
        answer: "A VPN (Virtual Private Network) encrypts your internet connection and hides your IP address, enhancing your online privacy and security. It routes your internet traffic through a secure server, making it appear as though you're accessing the internet from that server's location.",
    },
    FaqEntry {
        question: "Is using a VPN legal?",
        answer: "Yes, using a VPN is legal in most countries. However, some countries have restrictions or regulations regarding VPN usage. Always make sure to comply with your local laws regarding internet usage.",
    },
    FaqEntry {
        question: "Can a VPN help me access blocked websites?",
        answer: "Yes, a VPN can allow you to bypass geographic restrictions by masking your IP address and presenting it as if you are accessing the internet from a different location. This enables access to content that may be blocked in your region.",
    },
    FaqEntry {
        question: "Will a VPN slow down my internet connection?",
        answer: "Using a VPN may result in a slight decrease in internet speed due to additional encryption and routing processes. However, many top-tier VPN services, like Anonium VPN, optimize their servers to minimize speed loss and can even improve speeds for certain activities.",
    },
    FaqEntry {
        question: "Can I use VPN on multiple devices?",
        answer: "Yes, Anonium VPN supports multiple devices, allowing you to use the service on smartphones, tablets, laptops, and desktops simultaneously using a single account.",
    },
    FaqEntry {
        question: "What protocols does Anonium VPN use for security?",
        answer: "Anonium VPN uses advanced security protocols such as OpenVPN, IKEv2/IPSec, and WireGuard, which offer strong encryption and are highly effective in protecting user data.",
    },
    FaqEntry {
        question: "How do I install and set up Anonium VPN?",
        answer: "To set up Anonium VPN, simply download the application for your device from our website, install it, and log in using your account credentials. From there, you can select a server and connect instantly.",
    },
    FaqEntry {
        question: "What should I do if I encounter issues while using Anonium VPN?",
        answer: "If you experience any issues, please visit our support page for troubleshooting steps. You can also reach out to our customer support team via live chat or email for prompt assistance.",
    },
];

pub const TOKENOMICS: [TokenFact; 4] = [
    TokenFact { icon: Icon::Coins, title: "Token Name", value: "SecureToken" },
    TokenFact { icon: Icon::Network, title: "Network", value: "Ethereum" },
    TokenFact { icon: Icon::Database, title: "Total Supply", value: "1,000,000 STK" },
    TokenFact { icon: Icon::Percent, title: "Tax (Buy/Sell)", value: "5% / 5%" },
];

pub const CTA_PERKS: [(Icon, &str); 3] = [
    (Icon::Lock, "Audited Smart Contracts"),
    (Icon::Shield, "Zero-Knowledge Privacy"),
    (Icon::Zap, "Lightning Fast"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_has_one_current_milestone() {
        let current = ROADMAP
            .iter()
            .filter(|m| m.status == MilestoneStatus::Current)
            .count();
        assert_eq!(current, 1);
        assert_eq!(ROADMAP[0].status, MilestoneStatus::Completed);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&MilestoneStatus::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");
        let parsed: MilestoneStatus = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(parsed, MilestoneStatus::Current);
    }

    #[test]
    fn every_plan_lists_features() {
        assert!(PLANS.iter().all(|plan| !plan.features.is_empty()));
        assert_eq!(PLANS[0].price, "Free");
    }
}
