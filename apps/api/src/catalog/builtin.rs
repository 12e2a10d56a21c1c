//! Built-in product tables: dimension labels and weights, the ten-question quiz,
//! the four boss profiles and the reason templates.

use std::collections::BTreeMap;

use super::{
    BossProfile, BossStats, CatalogFile, Dimension, DimensionSpec, EmployeeReview,
    ProfileVector, Question, QuestionOption, ReasonTemplates,
};

use Dimension::{Action, Communication, Environment, Feedback, Management, Teamwork};

pub fn catalog_file() -> CatalogFile {
    CatalogFile {
        dimensions: dimensions(),
        questions: questions(),
        bosses: bosses(),
        templates: templates(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dimensions
// ────────────────────────────────────────────────────────────────────────────

/// (dimension, label, min_label, max_label, similarity, weight)
const DIMENSION_TABLE: &[(Dimension, &str, &str, &str, bool, f64)] = &[
    (Dimension::Action, "行動スタイル", "慎重・計画", "即断・即決", true, 1.2),
    (Dimension::Communication, "コミュニケーション", "論理・ファクト", "共感・情緒", true, 1.5),
    (Dimension::Management, "マネジメント", "権限委譲", "ハンズオン", false, 1.0),
    (Dimension::Environment, "環境適性", "安定・秩序", "変化・革新", true, 1.1),
    (Dimension::Feedback, "評価基準", "結果重視", "プロセス重視", false, 1.0),
    (Dimension::Teamwork, "チームワーク", "個の力", "チームの和", true, 1.3),
];

fn dimensions() -> Vec<DimensionSpec> {
    DIMENSION_TABLE
        .iter()
        .map(
            |&(dimension, label, min_label, max_label, similarity, weight)| DimensionSpec {
                dimension,
                label: label.to_string(),
                min_label: min_label.to_string(),
                max_label: max_label.to_string(),
                similarity,
                weight,
            },
        )
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Quiz
// ────────────────────────────────────────────────────────────────────────────

type OptionRow = (&'static str, &'static [(Dimension, f64)]);

const QUESTION_TABLE: &[(u32, &str, [OptionRow; 4])] = &[
    (
        1,
        "新しいプロジェクトが始まったとき、まず何をする？",
        [
            ("リスクを洗い出し、詳細な計画を立てる", &[(Action, 20.0), (Environment, 20.0)]),
            ("まずは走り出し、走りながら考える", &[(Action, 90.0), (Environment, 90.0)]),
            ("チームメンバーと話し合い、役割分担を決める", &[(Teamwork, 80.0), (Communication, 70.0)]),
            ("成功の定義とゴールを明確にする", &[(Feedback, 20.0), (Management, 30.0)]),
        ],
    ),
    (
        2,
        "ミスをしてしまったとき、上司にどう対応してほしい？",
        [
            ("なぜ起きたのか、論理的に原因を分析してほしい", &[(Communication, 20.0), (Feedback, 20.0)]),
            ("まずは気持ちに寄り添い、励ましてほしい", &[(Communication, 90.0), (Teamwork, 80.0)]),
            ("挽回のチャンスとして、すぐに次の仕事を任せてほしい", &[(Action, 80.0), (Management, 20.0)]),
            ("具体的な改善策を一緒に考えてほしい", &[(Management, 80.0), (Feedback, 80.0)]),
        ],
    ),
    (
        3,
        "仕事のモチベーションが最も上がる瞬間は？",
        [
            ("誰も思いつかなかった新しいアイデアが閃いたとき", &[(Environment, 90.0), (Action, 80.0)]),
            ("チーム全員で困難な目標を達成したとき", &[(Teamwork, 90.0), (Communication, 80.0)]),
            ("自分のスキルアップや成長を実感できたとき", &[(Management, 20.0), (Feedback, 80.0)]),
            ("目に見える成果が出て、周囲に認められたとき", &[(Feedback, 20.0), (Action, 60.0)]),
        ],
    ),
    (
        4,
        "理想のチームの雰囲気は？",
        [
            ("静かで集中でき、各々がプロとして自律している", &[(Teamwork, 20.0), (Communication, 30.0)]),
            ("ワイワイと活気があり、常に誰かが話している", &[(Teamwork, 90.0), (Communication, 90.0)]),
            ("規律があり、整理整頓されている", &[(Environment, 20.0), (Management, 70.0)]),
            ("常に変化があり、刺激的で飽きない", &[(Environment, 90.0), (Action, 80.0)]),
        ],
    ),
    (
        5,
        "上司への報告・連絡・相談、あなたのスタイルは？",
        [
            ("必要なことだけを簡潔に、結論から伝える", &[(Communication, 20.0), (Action, 60.0)]),
            ("プロセスや感情も含めて、こまめに共有する", &[(Communication, 90.0), (Management, 80.0)]),
            ("問題が起きたときだけ相談し、基本は任せてほしい", &[(Management, 20.0), (Action, 70.0)]),
            ("定例ミーティングでまとめて報告する", &[(Environment, 30.0), (Management, 50.0)]),
        ],
    ),
    (
        6,
        "プレッシャーがかかる状況で、あなたはどう感じる？",
        [
            ("燃える。本領を発揮できる", &[(Action, 90.0), (Environment, 85.0)]),
            ("不安だが、準備をすれば対応できる", &[(Action, 30.0), (Feedback, 70.0)]),
            ("チームで乗り越えたい", &[(Teamwork, 90.0), (Communication, 85.0)]),
            ("できれば避けたい", &[(Environment, 20.0), (Teamwork, 60.0)]),
        ],
    ),
    (
        7,
        "仕事で最も大切にしている価値観は？",
        [
            ("革新と創造性", &[(Environment, 95.0), (Action, 80.0)]),
            ("効率と生産性", &[(Action, 70.0), (Feedback, 30.0)]),
            ("人間関係と信頼", &[(Teamwork, 95.0), (Communication, 90.0)]),
            ("成長と学び", &[(Feedback, 85.0), (Management, 40.0)]),
        ],
    ),
    (
        8,
        "意見が対立したとき、あなたは？",
        [
            ("データや論理で説得する", &[(Communication, 20.0), (Feedback, 30.0)]),
            ("相手の立場を理解しようとする", &[(Communication, 90.0), (Teamwork, 85.0)]),
            ("第三者の意見を求める", &[(Teamwork, 70.0), (Management, 60.0)]),
            ("自分の信念を貫く", &[(Action, 85.0), (Management, 25.0)]),
        ],
    ),
    (
        9,
        "学習や成長において、あなたに合うスタイルは？",
        [
            ("体系的な研修やセミナー", &[(Environment, 25.0), (Feedback, 75.0)]),
            ("実践を通じた試行錯誤", &[(Action, 90.0), (Environment, 80.0)]),
            ("メンターからの1on1指導", &[(Management, 85.0), (Communication, 75.0)]),
            ("同僚との議論や協働", &[(Teamwork, 90.0), (Communication, 85.0)]),
        ],
    ),
    (
        10,
        "キャリアにおいて、今最も求めているものは？",
        [
            ("安定した環境での着実な成長", &[(Environment, 20.0), (Feedback, 70.0)]),
            ("大きな裁量と挑戦の機会", &[(Management, 15.0), (Action, 90.0)]),
            ("優れたチームとの協働経験", &[(Teamwork, 95.0), (Communication, 85.0)]),
            ("明確なキャリアパスと昇進", &[(Feedback, 25.0), (Management, 60.0)]),
        ],
    ),
];

fn questions() -> Vec<Question> {
    QUESTION_TABLE
        .iter()
        .map(|(id, text, options)| Question {
            id: *id,
            text: text.to_string(),
            options: options
                .iter()
                .map(|(option_text, scores)| QuestionOption {
                    text: option_text.to_string(),
                    scores: scores.iter().copied().collect::<BTreeMap<_, _>>(),
                })
                .collect(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Bosses
// ────────────────────────────────────────────────────────────────────────────

fn vector(
    action: f64,
    communication: f64,
    management: f64,
    environment: f64,
    feedback: f64,
    teamwork: f64,
) -> ProfileVector {
    ProfileVector {
        action,
        communication,
        management,
        environment,
        feedback,
        teamwork,
    }
}

fn review(employee_name: &str, role: &str, tenure: &str, rating: u8, comment: &str) -> EmployeeReview {
    EmployeeReview {
        employee_name: employee_name.to_string(),
        role: role.to_string(),
        tenure: tenure.to_string(),
        rating,
        comment: comment.to_string(),
    }
}

fn stats(average_tenure: &str, promotion_rate: &str, satisfaction_score: u32, team_size: u32) -> BossStats {
    BossStats {
        average_tenure: average_tenure.to_string(),
        promotion_rate: promotion_rate.to_string(),
        satisfaction_score,
        team_size,
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

fn bosses() -> Vec<BossProfile> {
    vec![
        BossProfile {
            id: "b1".to_string(),
            name: "佐藤 優子".to_string(),
            role: "プロダクト開発部 部長".to_string(),
            department: "Product Development".to_string(),
            image_color: "from-blue-500 to-cyan-400".to_string(),
            tags: tags(&["ビジョナリー", "任せる力", "スピード重視"]),
            scores: vector(90.0, 60.0, 30.0, 90.0, 40.0, 70.0),
            catchphrase: "失敗を恐れず、まずはやってみよう。".to_string(),
            management_philosophy: "メンバーの自律性を最大限尊重し、大きな裁量を与えることで、個々の創造性とオーナーシップを引き出します。".to_string(),
            reviews: vec![
                review("山田 太郎", "プロダクトマネージャー", "3年", 5, "佐藤部長のもとで、自分の可能性を最大限引き出せました。失敗を恐れず挑戦できる環境が素晴らしいです。"),
                review("鈴木 花子", "エンジニアリードー", "2年", 4, "スピード感があり、意思決定が早い。ただし細かいサポートは少ないので、自走力が求められます。"),
                review("田中 次郎", "デザイナー", "4年", 5, "「とにかくやってみよう」の精神で、新しいアイデアをすぐに試せる。成長スピードが圧倒的に速いです。"),
            ],
            stats: stats("3.2年", "65%", 92, 15),
        },
        BossProfile {
            id: "b2".to_string(),
            name: "田中 健一".to_string(),
            role: "営業統括本部 本部長".to_string(),
            department: "Sales Division".to_string(),
            image_color: "from-red-500 to-orange-400".to_string(),
            tags: tags(&["熱血", "チームワーク", "面倒見が良い"]),
            scores: vector(70.0, 90.0, 80.0, 60.0, 70.0, 95.0),
            catchphrase: "一人で悩むな、チームで勝つぞ。".to_string(),
            management_philosophy: "チーム全員が家族のように支え合い、一丸となって目標を達成する。個人の成功よりもチームの勝利を優先します。".to_string(),
            reviews: vec![
                review("佐々木 美咲", "営業マネージャー", "5年", 5, "田中本部長は本当に面倒見が良く、困ったときは必ず助けてくれます。チームの結束力が他部署とは段違いです。"),
                review("高橋 大輔", "営業", "1年", 4, "熱い方です。毎日のように励まされ、チームで目標を追いかける楽しさを知りました。ただし個人行動は好まれません。"),
                review("伊藤 真理子", "営業リーダー", "6年", 5, "人として尊敬できる上司。部下の悩みに真剣に向き合い、一緒に涙を流してくれることさえあります。"),
            ],
            stats: stats("4.8年", "58%", 95, 28),
        },
        BossProfile {
            id: "b3".to_string(),
            name: "鈴木 誠".to_string(),
            role: "経営企画室 室長".to_string(),
            department: "Corporate Planning".to_string(),
            image_color: "from-indigo-500 to-purple-400".to_string(),
            tags: tags(&["論理的", "冷静沈着", "公平性"]),
            scores: vector(40.0, 20.0, 50.0, 30.0, 20.0, 40.0),
            catchphrase: "数字は嘘をつかない。事実に基づこう。".to_string(),
            management_philosophy: "感情に流されず、常にデータとロジックに基づいた意思決定を行う。公平な評価と透明性を何よりも重視します。".to_string(),
            reviews: vec![
                review("小林 健太", "経営企画", "2年", 4, "鈴木室長は非常に論理的で、曖昧さを一切許しません。厳しいですが、公平で筋が通っています。"),
                review("中村 さくら", "データアナリスト", "3年", 4, "感情的なやり取りが苦手な方ですが、データに基づいた議論は非常に建設的。成長できる環境です。"),
                review("渡辺 翔太", "戦略プランナー", "4年", 3, "優秀な方ですが、少し冷たく感じることも。ロジカルシンキングが得意な人には最適な上司だと思います。"),
            ],
            stats: stats("3.5年", "72%", 78, 12),
        },
        BossProfile {
            id: "b4".to_string(),
            name: "高橋 エリカ".to_string(),
            role: "クリエイティブディレクター".to_string(),
            department: "Design Division".to_string(),
            image_color: "from-pink-500 to-rose-400".to_string(),
            tags: tags(&["革新的", "自由", "感性重視"]),
            scores: vector(80.0, 80.0, 10.0, 95.0, 80.0, 60.0),
            catchphrase: "常識を疑え。もっと自由に。".to_string(),
            management_philosophy: "既成概念にとらわれず、メンバーの独創性と感性を最大限尊重。自由な発想から革新が生まれると信じています。".to_string(),
            reviews: vec![
                review("松本 あかり", "UIデザイナー", "2年", 5, "高橋さんのもとでは、自分のクリエイティビティが爆発しました。型にはまらない自由な環境が最高です。"),
                review("吉田 拓海", "アートディレクター", "1年", 4, "刺激的で毎日が新鮮。ただし、ルールや体系が少ないので、自己管理能力が必須です。"),
                review("森田 琴音", "グラフィックデザイナー", "3年", 5, "常識を疑え、と言われ続けて3年。今では自分が思いもよらないアイデアを出せるようになりました。"),
            ],
            stats: stats("2.8年", "45%", 88, 18),
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Reason templates
// ────────────────────────────────────────────────────────────────────────────

fn templates() -> ReasonTemplates {
    ReasonTemplates {
        high_synergy: tags(&[
            "あなたの「{user_strength}」な姿勢は、{boss_name}の「{boss_strength}」というスタイルと非常に高い相乗効果を生み出します。お互いの強みが増幅され、爆発的な成果を生み出せるペアです。",
            "{boss_name}は、あなたの「{user_strength}」という特性を誰よりも高く評価し、最大限に活かすことができるリーダーです。あなたの才能が、このチームの起爆剤となるでしょう。",
        ]),
        supportive: tags(&[
            "{boss_name}の「{boss_strength}」というスタンスは、あなたの成長を強力に後押しします。あなたが安心して「{user_strength}」を発揮できる環境が、ここにはあります。",
            "心理的安全性が非常に高いマッチングです。{boss_name}のもとであれば、あなたは失敗を恐れずに、本来の「{user_strength}」をのびのびと発揮できるでしょう。",
        ]),
        complementary: tags(&[
            "あなたの「{user_strength}」という特徴は、{boss_name}のスタイルを完璧に補完します。{boss_name}が全体像を描き、あなたがそれを着実に実行する、そんな理想的な役割分担が期待できます。",
            "自分にない視点を持つ二人だからこそ、死角がなくなります。あなたの「{user_strength}」は、{boss_name}にとって喉から手が出るほど欲しい能力です。",
        ]),
    }
}
