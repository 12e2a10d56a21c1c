//! Demo roster used when no database is configured.

use crate::placement::models::{
    Candidate, CandidateDetails, CandidateStatus, Education, InterviewLog, Person, Preferences,
    Resume, Team, TeamMatchScore, TeamMetrics, Trait, WorkHistory,
};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[derive(Clone, Copy)]
enum TraitKind {
    Leadership,
    Creative,
    Analytical,
    Supportive,
    Ambitious,
    Diligent,
}

use TraitKind::*;

fn trait_of(kind: TraitKind) -> Trait {
    let (id, label, color) = match kind {
        Leadership => ("t1", "リーダーシップ", "bg-blue-500/20 text-blue-300"),
        Creative => ("t2", "独創性", "bg-purple-500/20 text-purple-300"),
        Analytical => ("t3", "分析思考", "bg-indigo-500/20 text-indigo-300"),
        Supportive => ("t4", "協調性", "bg-green-500/20 text-green-300"),
        Ambitious => ("t5", "野心家", "bg-red-500/20 text-red-300"),
        Diligent => ("t6", "誠実", "bg-slate-500/20 text-slate-300"),
    };
    Trait {
        id: id.to_string(),
        label: label.to_string(),
        color: color.to_string(),
    }
}

fn person(
    id: &str,
    name: &str,
    role: &str,
    avatar_seed: &str,
    traits: &[TraitKind],
    stress_level: u32,
    performance: u32,
) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: format!("{AVATAR_BASE}{avatar_seed}"),
        traits: traits.iter().map(|&k| trait_of(k)).collect(),
        stress_level,
        performance,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: "team-alpha".to_string(),
            name: "Alpha Squad".to_string(),
            description: "新規事業開発・イノベーション特化チーム".to_string(),
            theme_color: "from-blue-600 to-cyan-500".to_string(),
            metrics: TeamMetrics {
                psychological_safety: 85,
                productivity: 92,
                innovation: 95,
            },
            leader: person("l1", "神宮寺 健", "Product Owner", "Ken", &[Leadership, Ambitious, Creative], 45, 98),
            members: vec![
                person("m1", "佐藤 浩二", "Frontend Dev", "Koji", &[Creative, Diligent], 30, 88),
                person("m2", "鈴木 愛", "Designer", "Ai", &[Creative, Supportive], 25, 90),
                person("m3", "高橋 翔", "Backend Dev", "Sho", &[Analytical, Diligent], 40, 92),
                person("m4", "田中 美咲", "Marketer", "Misaki", &[Ambitious, Supportive], 50, 85),
                person("m5", "伊藤 健太", "Engineer", "Kenta", &[Analytical], 35, 80),
            ],
        },
        Team {
            id: "team-beta".to_string(),
            name: "Beta Force".to_string(),
            description: "基幹システム・安定運用チーム".to_string(),
            theme_color: "from-emerald-600 to-teal-500".to_string(),
            metrics: TeamMetrics {
                psychological_safety: 92,
                productivity: 88,
                innovation: 60,
            },
            leader: person("l2", "堂本 剛", "Tech Lead", "Tsuyoshi", &[Supportive, Analytical, Diligent], 20, 95),
            members: vec![
                person("m6", "渡辺 裕子", "SRE", "Yuko", &[Diligent, Analytical], 15, 94),
                person("m7", "小林 大輔", "Backend Dev", "Daisuke", &[Diligent, Supportive], 20, 89),
                person("m8", "加藤 舞", "QA", "Mai", &[Analytical, Diligent], 10, 92),
                person("m9", "吉田 拓也", "Infra", "Takuya", &[Analytical], 25, 88),
                person("m10", "佐々木 玲奈", "Support", "Rena", &[Supportive], 15, 90),
            ],
        },
        Team {
            id: "team-gamma".to_string(),
            name: "Gamma Sales".to_string(),
            description: "法人営業・クライアントサクセス".to_string(),
            theme_color: "from-orange-600 to-amber-500".to_string(),
            metrics: TeamMetrics {
                psychological_safety: 75,
                productivity: 96,
                innovation: 70,
            },
            leader: person("l3", "松本 潤", "Sales Manager", "Jun", &[Ambitious, Leadership, Supportive], 60, 99),
            members: vec![
                person("m11", "井上 真央", "Sales", "Mao", &[Ambitious, Supportive], 55, 95),
                person("m12", "木村 拓哉", "Sales", "TakuyaK", &[Ambitious, Leadership], 65, 98),
                person("m13", "工藤 静香", "CS", "Shizuka", &[Supportive, Diligent], 40, 92),
                person("m14", "長瀬 智也", "Sales", "Tomoya", &[Ambitious, Creative], 50, 90),
                person("m15", "岡田 准一", "Sales", "Junichi", &[Diligent, Ambitious], 45, 93),
            ],
        },
    ]
}

fn match_scores(alpha: u32, beta: u32, gamma: u32) -> Vec<TeamMatchScore> {
    [("team-alpha", alpha), ("team-beta", beta), ("team-gamma", gamma)]
        .into_iter()
        .map(|(team_id, score)| TeamMatchScore {
            team_id: team_id.to_string(),
            score,
        })
        .collect()
}

fn interview(interviewer: &str, role: &str, date: &str, score: u8, feedback: &str) -> InterviewLog {
    InterviewLog {
        interviewer: interviewer.to_string(),
        role: role.to_string(),
        date: date.to_string(),
        score,
        feedback: feedback.to_string(),
    }
}

fn education(school: &str, degree: &str, year: &str) -> Education {
    Education {
        school: school.to_string(),
        degree: degree.to_string(),
        year: year.to_string(),
    }
}

fn job(company: &str, role: &str, period: &str, description: &str) -> WorkHistory {
    WorkHistory {
        company: company.to_string(),
        role: role.to_string(),
        period: period.to_string(),
        description: description.to_string(),
    }
}

fn candidate(person: Person, match_scores: Vec<TeamMatchScore>, details: CandidateDetails) -> Candidate {
    Candidate {
        person,
        status: CandidateStatus::Pending,
        assigned_team_id: None,
        match_scores,
        details,
    }
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        candidate(
            person("c1", "新垣 結衣", "Creative Director", "Yui", &[Creative, Ambitious, Leadership], 0, 0),
            match_scores(96, 65, 78),
            CandidateDetails {
                resume: Resume {
                    education: vec![
                        education("東京藝術大学", "美術学部 デザイン科", "2015"),
                        education("Parsons School of Design", "MFA Design", "2017"),
                    ],
                    work_history: vec![
                        job("Global Tech Inc.", "Lead Designer", "2020-Present", "グローバルブランドのリブランディングを主導。デザインシステム構築により開発生産性を30%向上。"),
                        job("Creative Agency X", "Art Director", "2017-2020", "大手飲料メーカーのキャンペーンサイトでカンヌライオンズ受賞。"),
                    ],
                    skills: strings(&["UI/UX Design", "Brand Strategy", "Team Management", "Figma", "Adobe CC"]),
                    certifications: strings(&["Google UX Design Certificate", "HCDスペシャリスト"]),
                },
                interview: vec![
                    interview("神宮寺 健", "Product Owner", "2023-11-15", 5, "圧倒的なポートフォリオと、ビジネス視点を持ったデザイン思考が素晴らしい。即戦力かつリーダー候補。"),
                    interview("人事部長", "HR", "2023-11-10", 4, "カルチャーフィットに懸念なし。非常に優秀だが、給与条件は高め。"),
                ],
                preferences: Preferences {
                    salary: "1000万 - 1200万円".to_string(),
                    start_date: "2024年1月以降".to_string(),
                    work_style: strings(&["Remote OK", "裁量労働制"]),
                    motivation: "デザインの力で社会課題を解決するプロダクトに携わりたい。".to_string(),
                },
            },
        ),
        candidate(
            person("c2", "星野 源", "Senior Engineer", "Gen", &[Analytical, Diligent, Supportive], 0, 0),
            match_scores(72, 94, 60),
            CandidateDetails {
                resume: Resume {
                    education: vec![education("東京工業大学", "情報理工学院", "2014")],
                    work_history: vec![
                        job("FinTech Startups", "Tech Lead", "2019-Present", "決済基盤のマイクロサービス化をリード。可用性99.99%を達成。"),
                        job("Mega Venture", "Backend Engineer", "2014-2019", "大規模トラフィックを捌く広告配信システムの開発に従事。"),
                    ],
                    skills: strings(&["Go", "Rust", "Kubernetes", "AWS", "System Architecture"]),
                    certifications: strings(&["AWS Solution Architect Professional", "CKA"]),
                },
                interview: vec![
                    interview("堂本 剛", "Tech Lead", "2023-11-18", 5, "技術力は申し分ない。特に堅牢なシステム設計への知見が深く、Betaチームの課題解決に直結する。"),
                    interview("CTO", "Executive", "2023-11-12", 4, "技術への探究心が強い。マネジメントよりはスペシャリスト志向。"),
                ],
                preferences: Preferences {
                    salary: "900万 - 1100万円".to_string(),
                    start_date: "即日可能".to_string(),
                    work_style: strings(&["Full Remote", "Flex"]),
                    motivation: "社会インフラとなるような、大規模かつ堅牢なシステム開発に没頭したい。".to_string(),
                },
            },
        ),
        candidate(
            person("c3", "堺 雅人", "Sales Executive", "Masato", &[Ambitious, Leadership, Analytical], 0, 0),
            match_scores(82, 55, 98),
            CandidateDetails {
                resume: Resume {
                    education: vec![education("早稲田大学", "政治経済学部", "2010")],
                    work_history: vec![
                        job("Enterprise SaaS Co.", "Sales Manager", "2018-Present", "エンタープライズ営業部門の立ち上げ。年間売上200%成長を3年連続達成。"),
                        job("Trading Company", "Sales", "2010-2018", "海外プラント輸出プロジェクトに従事。数億円規模の交渉をまとめる。"),
                    ],
                    skills: strings(&["Enterprise Sales", "Negotiation", "Team Building", "Salesforce", "English (Business)"]),
                    certifications: strings(&["MBA (Part-time)", "TOEIC 950"]),
                },
                interview: vec![
                    interview("松本 潤", "Sales Manager", "2023-11-16", 5, "圧倒的な実績と、論理的かつ情熱的なプレゼン能力。Gammaチームの起爆剤になる。"),
                    interview("CEO", "Executive", "2023-11-14", 5, "視座が高く、将来の幹部候補として期待できる。"),
                ],
                preferences: Preferences {
                    salary: "1200万 - 1500万円".to_string(),
                    start_date: "2024年4月".to_string(),
                    work_style: strings(&["Office Base", "Business Trip OK"]),
                    motivation: "日本発のSaaSを世界に広めるための、営業組織の強化に挑戦したい。".to_string(),
                },
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_shape() {
        let teams = teams();
        assert_eq!(teams.len(), 3);
        assert!(teams.iter().all(|t| t.members.len() == 5));
        let cands = candidates();
        assert_eq!(cands.len(), 3);
        assert!(cands.iter().all(|c| c.is_pending() && c.match_scores.len() == 3));
    }

    #[test]
    fn test_every_scored_team_is_on_the_roster() {
        let teams = teams();
        for c in candidates() {
            for s in &c.match_scores {
                assert!(teams.iter().any(|t| t.id == s.team_id), "{} → {}", c.id(), s.team_id);
            }
        }
    }
}
